use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};

use fitscale::{fit_default, select_strategy, SmartResizer};
use fitscale_image::{Image, ImageSize};

#[derive(FromArgs)]
/// Resize a random RGB image with the adaptive resizer
struct Args {
    /// width of the source image
    #[argh(option, default = "1920")]
    width: usize,

    /// height of the source image
    #[argh(option, default = "1080")]
    height: usize,

    /// target width, ignored when a canvas is given
    #[argh(option, default = "640")]
    target_width: usize,

    /// target height, ignored when a canvas is given
    #[argh(option, default = "360")]
    target_height: usize,

    /// width of a canvas to fit the image into
    #[argh(option)]
    canvas_width: Option<usize>,

    /// height of a canvas to fit the image into
    #[argh(option)]
    canvas_height: Option<usize>,

    /// use a single resampling pass instead of the detail-preserving path
    #[argh(switch)]
    fast: bool,

    /// seed of the random image
    #[argh(option, default = "0")]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };

    // create a random image
    let mut rng = StdRng::seed_from_u64(args.seed);
    let data = (0..size.area() * 3).map(|_| rng.random()).collect();
    let image = Image::<u8, 3>::new(size, data)?;

    let target = match (args.canvas_width, args.canvas_height) {
        (Some(width), Some(height)) => {
            let fitted = fit_default(size, ImageSize { width, height })?;
            log::info!(
                "fitted {size} into {width}x{height}: {} at scale {:.3} (clamped: {})",
                fitted.size,
                fitted.scale,
                fitted.clamped
            );
            fitted.size
        }
        (None, None) => ImageSize {
            width: args.target_width,
            height: args.target_height,
        },
        _ => return Err("--canvas-width and --canvas-height must be given together".into()),
    };

    let preserve_detail = !args.fast;
    let strategy = select_strategy(size, target, preserve_detail);

    let resizer: SmartResizer = SmartResizer::default();
    let resized = resizer.resize(&image, target, preserve_detail)?;

    println!("original: {}", image.size());
    println!("target:   {target} ({strategy})");
    println!("resized:  {}", resized.size());

    Ok(())
}
