pub mod test_prelude;
