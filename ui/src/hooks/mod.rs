pub mod use_lookup;
