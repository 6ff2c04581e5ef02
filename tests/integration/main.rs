mod test_gsdp;
mod test_tags;
