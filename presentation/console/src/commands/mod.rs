pub mod items;
pub mod lists;
pub mod permissions;

use anyhow::Context;
use clap::Args;

use business::domain::messenger::Message;
use business::domain::shared::value_objects::{
    CompanyBusinessUnitId, CompanyUserId, CustomerReference,
};
use business::domain::shopping_list::model::{CompanyUser, Customer};

use crate::setup::dependency_injection::DependencyContainer;

/// Identifies the customer (and optionally the company user) acting.
#[derive(Args, Debug, Clone)]
pub struct CustomerArgs {
    /// Customer reference, e.g. DE--1
    #[arg(long)]
    pub customer: String,

    /// Company user acting on behalf of the customer
    #[arg(long, requires = "business_unit")]
    pub company_user: Option<i64>,

    /// Business unit of the company user
    #[arg(long)]
    pub business_unit: Option<i64>,
}

impl CustomerArgs {
    pub fn customer_reference(&self) -> CustomerReference {
        CustomerReference::new(self.customer.trim())
    }

    pub fn to_customer(&self) -> Customer {
        let customer = Customer::new(self.customer_reference());
        match (self.company_user, self.business_unit) {
            (Some(id_company_user), Some(id_company_business_unit)) => {
                customer.with_company_user(CompanyUser {
                    id_company_user: CompanyUserId::new(id_company_user),
                    id_company_business_unit: CompanyBusinessUnitId::new(
                        id_company_business_unit,
                    ),
                })
            }
            _ => customer,
        }
    }
}

/// Builds the customer session and loads its grants into the permission engine.
pub async fn session(
    container: &DependencyContainer,
    args: &CustomerArgs,
) -> anyhow::Result<Customer> {
    container
        .expand_customer
        .execute(args.to_customer())
        .await
        .context("expanding customer permissions")
}

fn render(message: &Message) -> String {
    message
        .parameters
        .iter()
        .fold(message.value.clone(), |text, (name, value)| {
            format!("{} {}={}", text, name, value)
        })
}

/// Prints and drains the notifications collected while a command ran.
pub fn flush_messages(container: &DependencyContainer) {
    for message in container.messenger.take_success_messages() {
        println!("[ok]    {}", render(&message));
    }
    for message in container.messenger.take_error_messages() {
        println!("[error] {}", render(&message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_attach_company_user_when_both_ids_given() {
        let args = CustomerArgs {
            customer: " DE--1 ".to_string(),
            company_user: Some(7),
            business_unit: Some(2),
        };

        let customer = args.to_customer();

        assert_eq!(customer.customer_reference.as_str(), "DE--1");
        assert_eq!(
            customer.company_user.map(|user| user.id_company_user),
            Some(CompanyUserId::new(7))
        );
    }

    #[test]
    fn should_render_message_parameters() {
        let message = Message::new("customer.account.shopping_list.item.add.success")
            .with_parameter("%sku%", "123");

        assert_eq!(
            render(&message),
            "customer.account.shopping_list.item.add.success %sku%=123"
        );
    }
}
