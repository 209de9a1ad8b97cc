use clap::Args;

use business::domain::shared::value_objects::{ShoppingListId, ShoppingListItemId};
use business::domain::shopping_list::model::ShoppingListItem;
use business::domain::shopping_list::use_cases::add_items::AddShoppingListItemsParams;
use business::domain::shopping_list::use_cases::clear::ClearShoppingListParams;
use business::domain::shopping_list::use_cases::remove_item::RemoveShoppingListItemParams;

use crate::setup::dependency_injection::DependencyContainer;

use super::{CustomerArgs, flush_messages, session};

/// `SKU:QUANTITY` pair given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemArg {
    pub sku: String,
    pub quantity: i32,
}

pub fn parse_item(raw: &str) -> Result<ItemArg, String> {
    let (sku, quantity) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected SKU:QUANTITY, got '{}'", raw))?;
    let quantity = quantity
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid quantity in '{}': {}", raw, err))?;

    Ok(ItemArg {
        sku: sku.trim().to_string(),
        quantity,
    })
}

#[derive(Args, Debug)]
pub struct AddItemsArgs {
    #[command(flatten)]
    pub customer: CustomerArgs,

    /// Target list id; the default list when omitted
    #[arg(long)]
    pub list: Option<i64>,

    /// Items as SKU:QUANTITY
    #[arg(long = "item", required = true, value_parser = parse_item)]
    pub items: Vec<ItemArg>,
}

#[derive(Args, Debug)]
pub struct ClearListArgs {
    #[command(flatten)]
    pub customer: CustomerArgs,

    #[arg(long)]
    pub list: i64,
}

#[derive(Args, Debug)]
pub struct RemoveItemArgs {
    #[command(flatten)]
    pub customer: CustomerArgs,

    #[arg(long)]
    pub list: i64,

    #[arg(long)]
    pub item: i64,
}

pub async fn add_items(container: &DependencyContainer, args: AddItemsArgs) -> anyhow::Result<()> {
    let customer = session(container, &args.customer).await?;
    let items = args
        .items
        .into_iter()
        .map(|item| ShoppingListItem::new(item.sku, item.quantity))
        .collect();

    let response = container
        .add_items
        .execute(AddShoppingListItemsParams {
            customer,
            id_shopping_list: args.list.map(ShoppingListId::new),
            items,
        })
        .await?;

    flush_messages(container);
    println!("success: {}", response.is_success);
    Ok(())
}

pub async fn clear_list(container: &DependencyContainer, args: ClearListArgs) -> anyhow::Result<()> {
    let customer = session(container, &args.customer).await?;
    let response = container
        .clear_list
        .execute(ClearShoppingListParams {
            id_shopping_list: ShoppingListId::new(args.list),
            id_company_user: customer.company_user.map(|user| user.id_company_user),
        })
        .await?;

    println!("success: {}", response.is_success);
    Ok(())
}

pub async fn remove_item(
    container: &DependencyContainer,
    args: RemoveItemArgs,
) -> anyhow::Result<()> {
    let customer = session(container, &args.customer).await?;
    let response = container
        .remove_item
        .execute(RemoveShoppingListItemParams {
            id_shopping_list_item: ShoppingListItemId::new(args.item),
            id_shopping_list: ShoppingListId::new(args.list),
            id_company_user: customer.company_user.map(|user| user.id_company_user),
        })
        .await?;

    println!("success: {}", response.is_success);
    Ok(())
}
