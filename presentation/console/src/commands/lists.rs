use clap::Args;

use business::domain::shopping_list::model::ShoppingListPagination;
use business::domain::shopping_list::use_cases::get_overview::GetShoppingListOverviewParams;
use business::domain::shopping_list::use_cases::resolve_default::ResolvedShoppingList;

use crate::setup::dependency_injection::DependencyContainer;

#[derive(Args, Debug)]
pub struct CustomerListArgs {
    /// Customer reference, e.g. DE--1
    #[arg(long)]
    pub customer: String,
}

#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// Customer reference, e.g. DE--1
    #[arg(long)]
    pub customer: String,

    /// List name; the default list when omitted
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, default_value_t = ShoppingListPagination::DEFAULT_ITEMS_PER_PAGE)]
    pub per_page: u32,
}

pub async fn default_list(
    container: &DependencyContainer,
    args: CustomerListArgs,
) -> anyhow::Result<()> {
    let resolved = container
        .resolve_default
        .execute(&args.customer.trim().into())
        .await?;
    let status = match &resolved {
        ResolvedShoppingList::Existing(_) => "existing",
        ResolvedShoppingList::Created(_) => "created",
        ResolvedShoppingList::Concurrent(_) => "created concurrently",
    };
    println!("{}: {}", status, serde_json::to_string_pretty(resolved.shopping_list())?);
    Ok(())
}

pub async fn lists(container: &DependencyContainer, args: CustomerListArgs) -> anyhow::Result<()> {
    let lists = container
        .get_customer_lists
        .execute(&args.customer.trim().into())
        .await?;
    println!("{}", serde_json::to_string_pretty(&lists)?);
    Ok(())
}

pub async fn overview(
    container: &DependencyContainer,
    default_name: &str,
    args: OverviewArgs,
) -> anyhow::Result<()> {
    let overview = container
        .get_overview
        .execute(GetShoppingListOverviewParams {
            customer_reference: args.customer.trim().into(),
            name: args.name.unwrap_or_else(|| default_name.to_string()),
            pagination: ShoppingListPagination::new(args.page, args.per_page),
        })
        .await?;

    println!(
        "{} (page {}, {} of {} items)",
        overview.shopping_list.name,
        overview.pagination.page,
        overview.items.items.len(),
        overview.items.total
    );
    for item in &overview.items.items {
        println!(
            "  {:>6}  {:<20} x{:<4} product={}",
            item.id.map(|id| id.to_string()).unwrap_or_default(),
            item.sku,
            item.quantity,
            item.id_product
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }
    println!(
        "shared with {} company users, {} business units",
        overview.shopping_list.shared_company_users.len(),
        overview.shopping_list.shared_company_business_units.len()
    );
    for list in &overview.shopping_lists {
        println!("  list {:?}: {}", list.id.map(|id| id.value()), list.name);
    }
    Ok(())
}
