mod fragment;

pub use fragment::use_fragment_token;
