use std::path::PathBuf;

use crate::calibration::params::types::PatchCounts;
use crate::calibration::toolkit::commands::ToolCommands;
use crate::calibration::toolkit::displays::{DisplayDevice, parse_display_list};
use crate::calibration::toolkit::types::{CommandOutput, OutputMode};

const DISPWIN_USAGE: &str = "Test display patch window, Set Video LUTs, Install profiles, Version 2.3.1
Author: Graeme W. Gill, licensed under the AGPL Version 3
usage: dispwin [options] [calfile]
 -v                   Verbose mode
 -d n                 Choose the display from the following list (default 1)
    1 = 'Built-in Retina Display, at 0, 0, width 1512, height 982 (Primary Display)'
    2 = 'DELL U2720Q, at 1512, 0, width 2560, height 1440'
 -dweb[:port]         Display via web server at port (default 8080)
 -c                   Load a linear display calibration
";

#[test]
fn test_parse_display_list() {
    let displays = parse_display_list(DISPWIN_USAGE);
    assert_eq!(
        displays,
        vec![
            DisplayDevice {
                number: 1,
                description: "Built-in Retina Display, at 0, 0, width 1512, height 982 (Primary Display)".to_string(),
            },
            DisplayDevice {
                number: 2,
                description: "DELL U2720Q, at 1512, 0, width 2560, height 1440".to_string(),
            },
        ]
    );
}

#[test]
fn test_parse_display_list_without_displays() {
    assert!(parse_display_list("usage: dispwin [options]\n -c  Load a linear calibration\n").is_empty());
    assert!(parse_display_list("").is_empty());
}

#[test]
fn test_display_list_from_stderr() {
    let output = CommandOutput {
        status: Some(1),
        stdout: String::new(),
        stderr: "  3 = 'Projector'\n".to_string(),
    };
    let displays = parse_display_list(&output.combined());
    assert_eq!(displays.len(), 1);
    assert_eq!(displays[0].number, 3);
    assert_eq!(displays[0].to_string(), "Display 3: Projector");
}

#[test]
fn test_generate_patches_arguments() {
    let commands = ToolCommands::new(None, "l");

    let both = commands.generate_patches(PatchCounts { grayscale: 64, color: 32 }, "cal_monitor_1");
    assert_eq!(both.program, PathBuf::from("targen"));
    assert_eq!(both.args, vec!["-v", "-d3", "-f0", "-g64", "-s32", "cal_monitor_1"]);
    assert_eq!(both.mode, OutputMode::Inherit);

    let gray = commands.generate_patches(PatchCounts { grayscale: 16, color: 0 }, "cal_monitor_1");
    assert_eq!(gray.args, vec!["-v", "-d3", "-f0", "-g16", "cal_monitor_1"]);

    let color = commands.generate_patches(PatchCounts { grayscale: 0, color: 8 }, "cal_monitor_1");
    assert_eq!(color.args, vec!["-v", "-d3", "-f0", "-s8", "cal_monitor_1"]);
}

#[test]
fn test_display_commands_use_tool_dir() {
    let commands = ToolCommands::new(Some(PathBuf::from("/opt/argyll/bin")), "c");

    let list = commands.list_displays();
    assert_eq!(list.program, PathBuf::from("/opt/argyll/bin/dispwin"));
    assert_eq!(list.program_name(), "dispwin");
    assert_eq!(list.mode, OutputMode::Capture);

    let reset = commands.reset_display(2);
    assert_eq!(reset.args, vec!["-d2", "-c"]);

    let measure = commands.measure_patches(2, "cal_monitor_2");
    assert_eq!(measure.program, PathBuf::from("/opt/argyll/bin/dispread"));
    assert_eq!(measure.args, vec!["-v", "-yc", "-d2", "cal_monitor_2"]);
    assert_eq!(measure.to_string(), "/opt/argyll/bin/dispread -v -yc -d2 cal_monitor_2");
}

#[test]
fn test_command_output_status() {
    let ok = CommandOutput { status: Some(0), ..CommandOutput::default() };
    let failed = CommandOutput { status: Some(2), ..CommandOutput::default() };
    let killed = CommandOutput::default();

    assert!(ok.success());
    assert!(!failed.success());
    assert_eq!(failed.status_description(), "exit status 2");
    assert!(!killed.success());
    assert_eq!(killed.status_description(), "terminated by signal");
}

#[cfg(unix)]
#[test]
fn test_system_runner_captures_output() {
    use crate::calibration::toolkit::runner::CommandRunner;
    use crate::calibration::toolkit::system_runner::SystemCommandRunner;
    use crate::calibration::toolkit::types::ToolInvocation;

    let dir = tempfile::tempdir().unwrap();
    let invocation = ToolInvocation {
        description: "Echo",
        program: PathBuf::from("sh"),
        args: vec!["-c".to_string(), "echo '1 = Test'; exit 3".to_string()],
        mode: OutputMode::Capture,
    };

    let output = SystemCommandRunner.run(&invocation, dir.path()).unwrap();
    assert_eq!(output.status, Some(3));
    assert_eq!(output.stdout, "1 = Test\n");
}

#[test]
fn test_system_runner_reports_missing_program() {
    use crate::calibration::common::error::CalibrationError;
    use crate::calibration::toolkit::runner::CommandRunner;
    use crate::calibration::toolkit::system_runner::SystemCommandRunner;

    let dir = tempfile::tempdir().unwrap();
    let commands = ToolCommands::new(Some(dir.path().join("missing")), "l");
    let result = SystemCommandRunner.run(&commands.list_displays(), dir.path());
    assert!(matches!(result, Err(CalibrationError::CommandSpawn { .. })));
}
