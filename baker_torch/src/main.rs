mod filemanager;
mod pipeline;
mod sources;

use log::info;
use pipeline::BakeToolError;

fn main() -> Result<(), BakeToolError> {
    lib_torch::init_logging()?;

    let base = lib_torch::data_path(".")?;
    let output = pipeline::run(&base)?;
    info!("Baking finished: {}", output.display());

    Ok(())
}
