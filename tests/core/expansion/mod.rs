pub mod test_expander;
