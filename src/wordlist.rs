pub mod chartrie;
pub mod compressed;
pub mod mutation;
pub mod searchconfig;
pub mod store;
pub mod wordlist;
