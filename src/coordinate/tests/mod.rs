pub(crate) mod test_utils;
mod destination_tests;
