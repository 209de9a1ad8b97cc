use crate::domain::messenger::Message;

pub const GLOSSARY_PARAM_SKU: &str = "%sku%";
pub const GLOSSARY_KEY_ITEM_ADD_SUCCESS: &str = "customer.account.shopping_list.item.add.success";
pub const GLOSSARY_KEY_ITEM_ADD_FAILED: &str = "customer.account.shopping_list.item.add.failed";

pub fn item_add_success(sku: &str) -> Message {
    Message::new(GLOSSARY_KEY_ITEM_ADD_SUCCESS).with_parameter(GLOSSARY_PARAM_SKU, sku)
}

pub fn item_add_failed(sku: &str) -> Message {
    Message::new(GLOSSARY_KEY_ITEM_ADD_FAILED).with_parameter(GLOSSARY_PARAM_SKU, sku)
}
