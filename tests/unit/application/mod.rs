mod test_callback;
mod test_config;
