pub mod test_bundle;
