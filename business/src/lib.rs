pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod get_most_used;
    }
    pub mod shopping_list {
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod ranking;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod get_most_used;
        }
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod add_product;
            pub mod get_all;
        }
    }
}
