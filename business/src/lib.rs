pub mod application {
    pub mod preferences {
        pub mod get;
        pub mod save;
    }
    pub mod selection {
        pub mod add;
        pub mod get_all;
        pub mod remove;
    }
    pub mod suggestion {
        pub mod generate;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod gift {
        pub mod catalogue;
        pub mod model;
        pub mod repository;
    }
    pub mod preferences {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get;
            pub mod save;
        }
    }
    pub mod selection {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_all;
            pub mod remove;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod suggestion {
        pub mod budget;
        pub mod candidates;
        pub mod engine;
        pub mod errors;
        pub mod model;
        pub mod ranking;
        pub mod services;
        pub mod templates;
        pub mod use_cases {
            pub mod generate;
        }
    }
}
