#[cfg(target_arch = "wasm32")]
fn main() {
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    #[cfg(feature = "cli_logs")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = native::run() {
        eprintln!("transform_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use matviz_engine::demo::ExampleOperations;
    use matviz_engine::matrix::{Matrix, format_number};
    use matviz_engine::shape::ShapeKind;
    use matviz_engine::transform::{Reflection, Transform, compose};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const DEFAULT_PLACES: usize = 3;

    const USAGE: &str = r#"transform_cli (matviz-engine)

USAGE:
  transform_cli shapes
  transform_cli run <shape> [transforms] [options]
  transform_cli demo [--seed <n>]

TRANSFORMS (applied in the order given):
  --translate <dx,dy>
  --scale <sx,sy>
  --reflect <none|x|y|xy|diag|antidiag>
  --rotate <degrees>
  --shear <kx,ky>
  --custom <a,b,c,d>   2x2 matrix [[a, b], [c, d]]

OPTIONS (run):
  --places <n>       Decimal places in the output (default 3)
  -h, --help         Show this help
"#;

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "shapes" => {
                print_shapes();
                Ok(())
            }
            "run" => cmd_run(&mut args),
            "demo" => cmd_demo(&mut args),
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn print_shapes() {
        for kind in ShapeKind::ALL {
            println!("{}", kind.name());
        }
    }

    #[derive(Debug, PartialEq)]
    struct RunOptions {
        shape: ShapeKind,
        transforms: Vec<Transform>,
        places: usize,
    }

    fn parse_run(args: &mut Args) -> Result<Option<RunOptions>, String> {
        let shape_name = args.next().ok_or("missing shape name")?;
        if shape_name == "-h" || shape_name == "--help" {
            return Ok(None);
        }
        let shape = ShapeKind::from_name(&shape_name)
            .ok_or_else(|| format!("unknown shape `{shape_name}`"))?;

        let mut transforms = Vec::new();
        let mut places = DEFAULT_PLACES;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--translate" => {
                    let [dx, dy] = parse_numbers(&args.value("--translate")?)?;
                    transforms.push(Transform::Translate { dx, dy });
                }
                "--scale" => {
                    let [sx, sy] = parse_numbers(&args.value("--scale")?)?;
                    transforms.push(Transform::Scale { sx, sy });
                }
                "--reflect" => {
                    let value = args.value("--reflect")?;
                    let axis = Reflection::from_name(&value)
                        .ok_or_else(|| format!("unknown reflection axis `{value}`"))?;
                    transforms.push(Transform::Reflect { axis });
                }
                "--rotate" => {
                    let [degrees] = parse_numbers(&args.value("--rotate")?)?;
                    transforms.push(Transform::Rotate { degrees });
                }
                "--shear" => {
                    let [kx, ky] = parse_numbers(&args.value("--shear")?)?;
                    transforms.push(Transform::Shear { kx, ky });
                }
                "--custom" => {
                    let [a, b, c, d] = parse_numbers(&args.value("--custom")?)?;
                    let matrix = Matrix::from_rows(&[[a, b], [c, d]]).map_err(|e| e.to_string())?;
                    transforms.push(Transform::Custom { matrix });
                }
                "--places" => {
                    let value = args.value("--places")?;
                    places = value
                        .parse()
                        .map_err(|_| format!("invalid value for --places: `{value}`"))?;
                }
                "-h" | "--help" => return Ok(None),
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        Ok(Some(RunOptions {
            shape,
            transforms,
            places,
        }))
    }

    fn cmd_run(args: &mut Args) -> Result<(), String> {
        let Some(options) = parse_run(args)? else {
            print_usage();
            return Ok(());
        };

        let shape = options.shape.shape();
        let transformed = shape
            .transform(&options.transforms)
            .map_err(|e| e.to_string())?;

        println!("shape: {}", options.shape.name());
        for (index, transform) in options.transforms.iter().enumerate() {
            println!("{:>3}. {}", index + 1, transform);
        }

        let homogeneous = compose(&options.transforms)
            .and_then(|map| map.to_homogeneous())
            .map_err(|e| e.to_string())?;
        println!("\ncomposed:\n{}", homogeneous.format_places(options.places));

        println!("\n{:>24}  {:>24}", "original", "transformed");
        for (before, after) in shape.vertices().iter().zip(transformed.vertices()) {
            println!(
                "{:>24}  {:>24}",
                format_point(*before, options.places),
                format_point(after, options.places)
            );
        }
        Ok(())
    }

    fn cmd_demo(args: &mut Args) -> Result<(), String> {
        let mut seed: Option<u64> = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.value("--seed")?;
                    seed = Some(
                        value
                            .parse()
                            .map_err(|_| format!("invalid value for --seed: `{value}`"))?,
                    );
                }
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let operations = match seed {
            Some(seed) => ExampleOperations::generate(&mut StdRng::seed_from_u64(seed)),
            None => ExampleOperations::generate(&mut rand::rng()),
        }
        .map_err(|e| e.to_string())?;
        println!("{operations}");
        Ok(())
    }

    fn parse_numbers<const N: usize>(value: &str) -> Result<[f64; N], String> {
        let numbers = value
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .ok()
                    .filter(|number| number.is_finite())
                    .ok_or_else(|| format!("invalid number `{part}`"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        <[f64; N]>::try_from(numbers)
            .map_err(|numbers| format!("expected {N} values, got {}", numbers.len()))
    }

    fn format_point(point: [f64; 2], places: usize) -> String {
        format!(
            "({}, {})",
            format_number(point[0], places),
            format_number(point[1], places)
        )
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::{Args, RunOptions, format_point, parse_numbers, parse_run};
        use matviz_engine::shape::ShapeKind;
        use matviz_engine::transform::{Reflection, Transform};

        fn args(line: &str) -> Args {
            Args::new(line.split_whitespace().map(str::to_owned).collect())
        }

        #[test]
        fn parses_transforms_in_order() {
            let options = parse_run(&mut args(
                "star --rotate 90 --translate 1,-2 --reflect x --places 1",
            ))
            .unwrap()
            .unwrap();
            assert_eq!(
                options,
                RunOptions {
                    shape: ShapeKind::Star,
                    transforms: vec![
                        Transform::Rotate { degrees: 90.0 },
                        Transform::Translate { dx: 1.0, dy: -2.0 },
                        Transform::Reflect {
                            axis: Reflection::XAxis
                        },
                    ],
                    places: 1,
                }
            );
        }

        #[test]
        fn custom_needs_four_values() {
            assert!(parse_run(&mut args("square --custom 1,2,3")).is_err());
            let options = parse_run(&mut args("square --custom 0,1,1,0"))
                .unwrap()
                .unwrap();
            assert_eq!(
                options.transforms[0].matrix().to_rows(),
                vec![vec![0.0, 1.0], vec![1.0, 0.0]]
            );
        }

        #[test]
        fn rejects_unknown_input() {
            assert!(parse_run(&mut args("circle")).is_err());
            assert!(parse_run(&mut args("square --spin 3")).is_err());
            assert!(parse_run(&mut args("square --scale")).is_err());
            assert!(parse_run(&mut args("square --reflect z")).is_err());
        }

        #[test]
        fn points_use_the_matrix_number_format() {
            assert_eq!(format_point([1.0, -0.125], 2), "(1, -0.12)");
            assert_eq!(format_point([2.0 / 3.0, 0.0], 3), "(0.667, 0)");
            assert_eq!(format_point([1.5, 2.0], 400), "(1.5, 2)");
        }

        #[test]
        fn parse_numbers_checks_count_and_finiteness() {
            assert_eq!(parse_numbers::<2>(" 1.5, -2 "), Ok([1.5, -2.0]));
            assert!(parse_numbers::<2>("1").is_err());
            assert!(parse_numbers::<1>("NaN").is_err());
            assert!(parse_numbers::<1>("abc").is_err());
        }
    }
}
