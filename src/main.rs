use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = mandelbrot_explorer::Cli::parse();
    mandelbrot_explorer::init_logging(cli.verbose);

    mandelbrot_explorer::run(cli)?;

    Ok(())
}
