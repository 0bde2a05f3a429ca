pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod outcome;
    }
    pub mod infrastructure {
        pub mod store;
    }
}

pub mod modules {
    pub mod cases {
        pub mod core {
            pub mod areas;
            pub mod case;
            pub mod evolve;
            pub mod identity;
            pub mod movement;
            pub mod ports;
            pub mod process_templates;
            pub mod session;
            pub mod state;
            pub mod time_in_area;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod settings;
            pub mod create_case {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod transfer_case {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_cases {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod case_history {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod track_time_in_area {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod report;
                pub mod tracker;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod attachments_in_memory;
                pub mod cases_in_memory;
                pub mod movements_in_memory;
                pub mod time_in_area_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod case_lifecycle_tests;
        pub mod list_cases_tests;
        pub mod time_in_area_tests;
    }
}
