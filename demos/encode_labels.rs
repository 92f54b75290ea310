use onehotgrad::{
    load_labels, parse_arguments, save_rows, write_rows, EncodeArgs, Error, LayerRegistry, Mode,
    NetParameter, Tensor,
};
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

fn run(args: &EncodeArgs) -> Result<(), Error> {
    let net = NetParameter::from_path(&args.config)?;

    let param = net.select_layer(args.layer.as_deref())?;

    let registry = LayerRegistry::default();
    let layer = registry.create(param)?;

    let labels = load_labels(&args.labels)?;
    let mut encoded = Tensor::default();
    layer.forward(Mode::Cpu, &labels, &mut encoded)?;
    info!(shape = ?encoded.shape, layer = %param.name, "encoded labels");

    match &args.output {
        Some(path) => {
            save_rows(path, &encoded)?;
            info!(path = %path.display(), "saved encoded labels");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_rows(&mut handle, &encoded)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let start = Instant::now();

    let args = match parse_arguments() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("finished in {:.2?}", start.elapsed());
}
