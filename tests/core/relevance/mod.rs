pub mod test_properties;
