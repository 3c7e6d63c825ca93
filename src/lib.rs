//! lib target
//!
//! Core periphery decomposition of graphs: coreness by degeneracy ordering and rich-core detection.


use env_logger::Builder;

#[macro_use]
extern crate lazy_static;

lazy_static! {
    static ref LOG: u64 = {
        let res = init_log();
        res
    };
}

// install a logger facility
fn init_log() -> u64 {
    let _ = Builder::from_default_env().try_init();
    println!("\n ************** initializing logger *****************\n");
    return 1;
}

/// installs an env_logger backend once. Safe to call many times.
pub fn init_logger() {
    lazy_static::initialize(&LOG);
}

pub mod structure;

pub mod tools;

pub mod prelude;
