pub mod application {
    pub mod cart {
        pub mod add_items_to_cart;
    }
    pub mod shopping_list {
        pub mod add_item;
        pub mod add_items;
        pub mod clear;
        pub mod expand_customer;
        pub mod find_permissions;
        pub mod get_items;
        pub mod get_lists;
        pub mod get_overview;
        pub mod get_permission_groups;
        pub mod item_validator;
        pub mod messages;
        pub mod remove_item;
        pub mod resolve_default;
        pub mod save_item;
        pub mod write_permission;
    }
    #[cfg(test)]
    pub mod test_support;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod messenger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod add_items_to_cart;
        }
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod model;
        pub mod permission;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod add_item;
            pub mod add_items;
            pub mod clear;
            pub mod expand_customer;
            pub mod find_permissions;
            pub mod get_items;
            pub mod get_lists;
            pub mod get_overview;
            pub mod get_permission_groups;
            pub mod remove_item;
            pub mod resolve_default;
            pub mod save_item;
        }
    }
}
