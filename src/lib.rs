pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod access {
        pub mod core {
            pub mod errors;
            pub mod model;
            pub mod rules;
        }
        pub mod use_cases {
            pub mod check_access {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_assignments {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod assignment_store;
                pub mod directory;
                pub mod in_memory;
                pub mod seed;
            }
        }
    }

    pub mod shifts {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod ledger;
            pub mod reconciliation;
            pub mod state;
        }
        pub mod use_cases {
            pub mod lifecycle;
            pub mod open_shift {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod post_movement {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod capture_payment {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod close_shift {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod preview_reconciliation {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod active_shifts;
                pub mod intent_outbox;
            }
        }
    }
}

pub mod shell;
