//! Application entry point and dispatch.

use anyhow::{Context, Result};

use smoothplot_core::{PlotSeries, Smoother, Window};
use smoothplot_tui::PlotApp;

use crate::config::{AppConfig, Command, PlotArgs, SmoothArgs};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "smoothplot", &mut std::io::stdout());
        return Ok(());
    }

    match &config.command {
        Some(Command::Smooth(args)) => run_smooth(args),
        Some(Command::Plot(args)) => run_plot(args),
        None => anyhow::bail!("no command given; run `smoothplot smooth` or `smoothplot plot`"),
    }
}

fn run_smooth(args: &SmoothArgs) -> Result<()> {
    let window = Window::new(args.window)?;
    let smoother = Smoother::new(window);

    let report = smoother
        .run(&args.input, &args.output)
        .with_context(|| format!("failed to smooth {}", args.input.display()))?;

    if !args.quiet {
        println!(
            "Smoothed {} rows ({} with a {}-row mean) into {}",
            report.rows,
            report.computed,
            report.window.size(),
            args.output.display()
        );
    }
    Ok(())
}

fn run_plot(args: &PlotArgs) -> Result<()> {
    // Load before touching the terminal so a bad file never opens the view.
    let series = PlotSeries::load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    if series.computed() == 0 {
        tracing::warn!(
            path = %args.input.display(),
            "no smoothed values to plot"
        );
    }

    let mut app = PlotApp::new(series).with_raw(args.raw);
    app.run().context("plot view error")?;
    Ok(())
}
