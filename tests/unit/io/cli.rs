//! Tests for command-line parsing and level generation

#[cfg(test)]
mod tests {
    use clap::Parser;
    use mazecarve::io::cli::Cli;
    use mazecarve::io::configuration::{
        DEFAULT_DIFFICULTY, DEFAULT_GENERATION_SPEED, DEFAULT_SEED, DEFAULT_VIEWPORT_HEIGHT,
        DEFAULT_VIEWPORT_WIDTH,
    };
    use mazecarve::io::image::WallPalette;
    use std::path::PathBuf;

    // Tests CLI parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.output, PathBuf::from("maze.png"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.difficulty, DEFAULT_DIFFICULTY);
        assert_eq!(cli.viewport_width, DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(cli.viewport_height, DEFAULT_VIEWPORT_HEIGHT);
        assert_eq!(cli.levels, 1);
        assert!(cli.speed.is_none());
        assert!(!cli.visualize);
        assert!(!cli.colors);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping the short flags for width and height
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "out/level.png",
            "-s",
            "123",
            "-d",
            "20",
            "-W",
            "1024",
            "-H",
            "768",
            "-l",
            "3",
            "--speed",
            "0.75",
            "-v",
            "-c",
            "-q",
        ]);

        assert_eq!(cli.output, PathBuf::from("out/level.png"));
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.difficulty, 20);
        assert_eq!(cli.viewport_width, 1024);
        assert_eq!(cli.viewport_height, 768);
        assert_eq!(cli.levels, 3);
        assert_eq!(cli.speed, Some(0.75));
        assert!(cli.visualize);
        assert_eq!(cli.palette(), WallPalette::Seeded);
        assert!(!cli.should_show_progress());
    }

    // Tests visualization implies a default speed when none is given
    // Verified by returning None whenever speed is unset
    #[test]
    fn test_effective_speed() {
        assert_eq!(Cli::parse_from(["program"]).effective_speed(), None);
        assert_eq!(
            Cli::parse_from(["program", "-v"]).effective_speed(),
            Some(DEFAULT_GENERATION_SPEED)
        );
        assert_eq!(
            Cli::parse_from(["program", "--speed", "0.2"]).effective_speed(),
            Some(0.2)
        );
        assert_eq!(Cli::parse_from(["program"]).palette(), WallPalette::Plain);
    }

    // Tests output naming for single and multiple levels
    // Verified by numbering levels from zero
    #[test]
    fn test_output_paths() {
        let single = Cli::parse_from(["program", "dir/maze.png"]);
        assert_eq!(single.level_output_path(0), PathBuf::from("dir/maze.png"));
        assert_eq!(
            single.visualization_output_path(0),
            PathBuf::from("dir/maze_visualization.gif")
        );

        let many = Cli::parse_from(["program", "dir/maze.png", "-l", "2"]);
        assert_eq!(many.level_output_path(0), PathBuf::from("dir/maze_level_1.png"));
        assert_eq!(many.level_output_path(1), PathBuf::from("dir/maze_level_2.png"));
        assert_eq!(
            many.visualization_output_path(1),
            PathBuf::from("dir/maze_level_2_visualization.gif")
        );
    }
}

#[cfg(test)]
mod level_runner_tests {
    use clap::Parser;
    use mazecarve::AlgorithmError;
    use mazecarve::io::cli::{Cli, LevelRunner};
    use std::path::Path;

    fn cli_for(output: &Path, extra: &[&str]) -> Cli {
        let output = output.to_str().expect("temp path is UTF-8");
        let mut args = vec!["program", output, "-W", "80", "-H", "40", "-q"];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    // Tests a single level run writes the PNG
    // Verified by skipping the export
    #[test]
    fn test_run_single_level() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("maze.png");

        let result = LevelRunner::new(cli_for(&output, &[])).run();

        assert!(result.is_ok());
        assert!(output.exists());
        let written = image::open(&output).expect("PNG should decode");
        assert_eq!((written.width(), written.height()), (80, 40));
    }

    // Tests multi-level runs write one numbered PNG and GIF per level
    // Verified by reusing the same output path for every level
    #[test]
    fn test_run_levels_with_visualization() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("maze.png");

        let result =
            LevelRunner::new(cli_for(&output, &["-l", "2", "-v", "--speed", "1.0", "-c"])).run();

        assert!(result.is_ok());
        for level in 1..=2 {
            assert!(temp_dir.path().join(format!("maze_level_{level}.png")).exists());
            assert!(
                temp_dir
                    .path()
                    .join(format!("maze_level_{level}_visualization.gif"))
                    .exists()
            );
        }
        assert!(!output.exists());
    }

    // Tests a speed without visualization writes only the PNG
    // Verified by recording every merge whenever a speed is given
    #[test]
    fn test_speed_without_visualization_writes_png_only() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("maze.png");

        let result = LevelRunner::new(cli_for(&output, &["--speed", "0.5"])).run();

        assert!(result.is_ok());
        assert!(output.exists());
        let written: Vec<_> = std::fs::read_dir(temp_dir.path())
            .expect("temp dir is readable")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name())
            .collect();
        assert_eq!(written, vec![std::ffi::OsString::from("maze.png")]);
    }

    // Tests invalid arguments are rejected before anything is written
    // Verified by removing the speed range check
    #[test]
    fn test_run_rejects_invalid_arguments() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("maze.png");

        for extra in [&["--speed", "1.5"][..], &["-l", "0"][..], &["-d", "0"][..]] {
            let result = LevelRunner::new(cli_for(&output, extra)).run();
            assert!(matches!(
                result,
                Err(AlgorithmError::InvalidParameter { .. })
            ));
        }
        assert!(!output.exists());
    }
}
