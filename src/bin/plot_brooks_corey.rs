use plotpy::{Curve, Plot};
use pmlaw::prelude::*;
use pmlaw::util::generate_curve_data;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "plot_brooks_corey",
    about = "Plots the raw and regularized Brooks-Corey capillary pressure and relative permeability curves"
)]
struct Options {
    /// Entry pressure pₑ
    #[structopt(long, default_value = "1000.0")]
    entry_pressure: f64,

    /// Shape exponent λ
    #[structopt(long, default_value = "2.0")]
    lambda: f64,

    /// Effective saturation below which the laws are regularized
    #[structopt(long, default_value = "0.01")]
    se_low: f64,

    /// Effective saturation above which the laws are regularized
    #[structopt(long, default_value = "0.99")]
    se_high: f64,

    /// Number of points per curve
    #[structopt(long, default_value = "201")]
    npoint: usize,

    /// Output directory (default: /tmp/pmlaw/results)
    #[structopt(long)]
    out_dir: Option<String>,
}

fn main() -> Result<(), StrError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // parse options
    let options = Options::from_args();

    // parameters
    let mut set = ParameterSet::new();
    set.set_entry_pressure(options.entry_pressure)
        .set_lambda(options.lambda)
        .set_regularization_thresholds(options.se_low, options.se_high);
    let params = set.finalize()?;
    log::info!("{:?}", params);

    // laws
    let raw = BrooksCorey::new(params.clone());
    let reg = RegularizedBrooksCorey::new(params)?;

    // capillary pressure
    let n = options.npoint;
    let (x_raw, pc_raw) = generate_curve_data(options.se_low / 2.0, 1.0, n, |se| raw.capillary_pressure(se))?;
    let (x_reg, pc_reg) = generate_curve_data(-0.05, 1.05, n, |se| reg.capillary_pressure(se))?;
    let mut curve_raw = Curve::new();
    let mut curve_reg = Curve::new();
    curve_raw.set_label("raw").set_line_style("--").draw(&x_raw, &pc_raw);
    curve_reg.set_label("regularized").draw(&x_reg, &pc_reg);
    let mut plot = Plot::new();
    plot.set_subplot(1, 2, 1)
        .add(&curve_raw)
        .add(&curve_reg)
        .grid_labels_legend("$S_e$", "$p_c$");

    // relative permeabilities
    let (x_raw, krw_raw) = generate_curve_data(0.0, 1.0, n, |se| raw.krw(se))?;
    let (_, krn_raw) = generate_curve_data(0.0, 1.0, n, |se| raw.krn(se))?;
    let (x_reg, krw_reg) = generate_curve_data(-0.05, 1.05, n, |se| reg.krw(se))?;
    let (_, krn_reg) = generate_curve_data(-0.05, 1.05, n, |se| reg.krn(se))?;
    let mut curve_krw_raw = Curve::new();
    let mut curve_krn_raw = Curve::new();
    let mut curve_krw_reg = Curve::new();
    let mut curve_krn_reg = Curve::new();
    curve_krw_raw.set_label("$k_{rw}$ raw").set_line_style("--").draw(&x_raw, &krw_raw);
    curve_krn_raw.set_label("$k_{rn}$ raw").set_line_style("--").draw(&x_raw, &krn_raw);
    curve_krw_reg.set_label("$k_{rw}$ regularized").draw(&x_reg, &krw_reg);
    curve_krn_reg.set_label("$k_{rn}$ regularized").draw(&x_reg, &krn_reg);
    plot.set_subplot(1, 2, 2)
        .add(&curve_krw_raw)
        .add(&curve_krn_raw)
        .add(&curve_krw_reg)
        .add(&curve_krn_reg)
        .grid_labels_legend("$S_e$", "$k_r$");

    // save figure
    let out_dir = options.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR);
    let path = format!("{}/brooks_corey.svg", out_dir);
    plot.set_figure_size_points(800.0, 350.0).save(&path)?;

    // message
    let thin_line = format!("{:─^1$}", "", path.len());
    println!("\n\n{}", thin_line);
    println!("Figure generated:");
    println!("{}", path);
    println!("{}\n\n", thin_line);
    Ok(())
}
