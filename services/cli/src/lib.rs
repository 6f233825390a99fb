mod cli;
mod demo;
mod infra;
mod render;

use eligibility_fit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
