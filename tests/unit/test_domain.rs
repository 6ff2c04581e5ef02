use gsdp_api::{
    application::ingest_gsdp::pipeline::{
        GsdpIngestPipeline, IngestOutcome, SourceColumns, parse_gsdp_value,
    },
    domain::gsdp::{record::GsdpRecord, year_index::is_year_column},
    infrastructure::{
        geography::state_names::india_state_names, sources::csv_source::read_csv_rows,
    },
};

fn ingest(csv: &str) -> IngestOutcome {
    let rows = read_csv_rows(csv.as_bytes(), "inline").expect("csv should parse");
    GsdpIngestPipeline::new(SourceColumns::default(), india_state_names()).run(&rows)
}

#[test]
fn year_column_headers_follow_fiscal_span_format() {
    assert!(is_year_column("2011-12"));
    assert!(is_year_column("2022-23 (Provisional)"));
    assert!(!is_year_column("2011"));
    assert!(!is_year_column("Sl. No."));
}

#[test]
fn odisha_scenario_from_csv() {
    let outcome = ingest("Sl. No.,State,2016-17,2017-18\n1,Odisha,120000,135000\n");

    assert_eq!(
        outcome.index.years().collect::<Vec<_>>(),
        ["2016-17", "2017-18"]
    );
    let expected = vec![GsdpRecord {
        sequence_number: "1".into(),
        state_name: "Orissa".into(),
        state_code: "1".into(),
        gsdp_value: 120000.0,
    }];
    assert_eq!(outcome.index.resolve("2016-17"), expected.as_slice());
    assert_eq!(outcome.index.resolve("2016"), expected.as_slice());
    assert!(outcome.index.resolve("2020").is_empty());
}

#[test]
fn every_indexed_value_is_finite() {
    let outcome = ingest(
        "Sl. No.,State,2011-12,2012-13,2013-14\n\
         1,Bihar,247144,NA,317101\n\
         2,Goa,,42367,-\n\
         ,Total,100,200,300\n\
         4,Kerala,364048,412313,465041\n",
    );

    for year in outcome.index.years() {
        for record in outcome.index.get(year).unwrap() {
            assert!(record.gsdp_value.is_finite(), "{year}: {record:?}");
        }
    }
    assert_eq!(outcome.index.get("2011-12").map(<[_]>::len), Some(2));
    assert_eq!(outcome.index.get("2012-13").map(<[_]>::len), Some(2));
    assert_eq!(outcome.index.get("2013-14").map(<[_]>::len), Some(2));
    assert_eq!(outcome.stats.rows_skipped, 1);
    assert_eq!(outcome.stats.cells_dropped, 3);
}

#[test]
fn records_keep_source_row_order() {
    let outcome = ingest(
        "Sl. No.,State,2011-12\n3,West Bengal,1\n1,Andhra Pradesh,2\n2,Assam,3\n",
    );
    let codes: Vec<_> = outcome
        .index
        .get("2011-12")
        .unwrap()
        .iter()
        .map(|r| r.state_code.as_str())
        .collect();
    assert_eq!(codes, ["3", "1", "2"]);
}

#[test]
fn leading_float_parsing_is_lenient() {
    assert_eq!(parse_gsdp_value("2,5"), Some(2.0));
    assert_eq!(parse_gsdp_value("+12.5"), Some(12.5));
    assert_eq!(parse_gsdp_value("abc"), None);
}
