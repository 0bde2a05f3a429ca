pub mod cases;
pub mod commands {
    pub mod create_case;
    pub mod transfer_case;
}
pub mod settings;
