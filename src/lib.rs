
pub mod service {
    pub mod clipboard;
    pub mod converter;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
}

pub mod models {
    pub mod conversion;
    pub mod error;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod utils;
}
