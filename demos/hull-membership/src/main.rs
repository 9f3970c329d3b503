use argh::FromArgs;

use euklid_hull::{is_in_hull, HullSpec};

#[derive(FromArgs)]
/// Rasterize an ASCII membership map of a convex hull
struct Args {
    /// number of sample points per axis
    #[argh(option, short = 'r', default = "21")]
    resolution: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // a convex pentagon around the unit square
    let hull = HullSpec::Points(vec![
        [0.0, 0.0],
        [1.0, 0.0],
        [1.3, 0.5],
        [1.0, 1.0],
        [0.0, 1.0],
    ]);

    let resolution = args.resolution.max(2);
    let step = 2.0 / (resolution - 1) as f64;

    let mut queries = Vec::with_capacity(resolution * resolution);
    for row in 0..resolution {
        for col in 0..resolution {
            // sample the [-0.5, 1.5] x [-0.5, 1.5] window, top row first
            let x = -0.5 + col as f64 * step;
            let y = 1.5 - row as f64 * step;
            queries.push([x, y]);
        }
    }

    let members = is_in_hull(&queries, &hull)?;
    log::debug!(
        "{} of {} sample points inside",
        members.iter().filter(|&&inside| inside).count(),
        members.len()
    );

    for row in 0..resolution {
        let line = (0..resolution)
            .map(|col| {
                if members[row * resolution + col] {
                    '#'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{line}");
    }

    Ok(())
}
