use std::process::ExitCode;

use fractal_zoom::{FileRenderController, PpmFilePresenter, USAGE, parse_args};

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args(args)?;

    let mut controller = FileRenderController::new(PpmFilePresenter::new(), args.config)?;
    controller.generate()?;
    controller.write(&args.output)?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_rejects_missing_arguments() {
        assert!(run(&[]).is_err());
    }

    #[test]
    fn test_run_writes_julia_image() {
        let path = std::env::temp_dir().join(format!("fractal_zoom_main_{}.ppm", std::process::id()));
        let args = vec![
            "j".to_string(),
            "-0.8".to_string(),
            "0.2".to_string(),
            path.display().to_string(),
        ];

        run(&args).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n1000 1000\n255\n"));
        std::fs::remove_file(&path).unwrap();
    }
}
