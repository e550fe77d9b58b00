use config_lookup_lambda::entry::run;
use config_lookup_lambda::handlers::Operation;
use config_lookup_lambda::runtime::category::Category;
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(Category::Function, Operation::Get).await
}
