use argh::FromArgs;

use euklid_rotation::{is_rotation_matrix3, rotate_points3d, rotation_between_vectors};

#[derive(FromArgs)]
/// Print the rotation matrix that aligns one 3D direction with another
struct Args {
    /// start direction as "x,y,z"
    #[argh(option, short = 'p', default = "String::from(\"1,0,0\")")]
    start: String,

    /// goal direction as "x,y,z"
    #[argh(option, short = 'q', default = "String::from(\"0,1,0\")")]
    goal: String,
}

fn parse_vector(text: &str) -> Result<[f64; 3], Box<dyn std::error::Error>> {
    let components = text
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    match components.as_slice() {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(format!("expected three comma-separated components, got {text:?}").into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let p = parse_vector(&args.start)?;
    let q = parse_vector(&args.goal)?;

    let rotation = rotation_between_vectors(&p, &q)?;
    log::debug!("proper rotation: {}", is_rotation_matrix3(&rotation, 1e-9));

    println!("rotation aligning {p:?} with {q:?}:");
    for row in &rotation {
        println!("  [{:+.6}, {:+.6}, {:+.6}]", row[0], row[1], row[2]);
    }

    let mut rotated = [[0.0; 3]; 1];
    rotate_points3d(&[p], &rotation, &mut rotated);
    println!("rotated start direction: {:?}", rotated[0]);

    Ok(())
}
