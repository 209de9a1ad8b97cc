use clap::Args;

use crate::setup::dependency_injection::DependencyContainer;

use super::{CustomerArgs, session};

#[derive(Args, Debug)]
pub struct PermissionsArgs {
    #[command(flatten)]
    pub customer: CustomerArgs,
}

/// Prints the shopping list grants of a company user and the permission
/// groups available for sharing.
pub async fn execute(container: &DependencyContainer, args: PermissionsArgs) -> anyhow::Result<()> {
    if args.customer.company_user.is_none() {
        anyhow::bail!("--company-user and --business-unit are required");
    }

    let customer = session(container, &args.customer).await?;
    println!("{}", serde_json::to_string_pretty(&customer.permissions)?);

    let groups = container.get_permission_groups.all_groups().await?;
    let default_group = container.get_permission_groups.default_group().await?;
    for group in groups {
        let marker = if group.id == default_group.id { "*" } else { " " };
        println!("{} {:>4} {}", marker, group.id, group.name);
    }

    Ok(())
}
