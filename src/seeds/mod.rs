pub mod test_users_seed;
