use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_maze_pathfinding"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .unwrap()
}

#[test]
fn failures_are_reported_once() {
    let output = run(&["--goal", "30,30"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr.matches("cell (30,30) is outside the 11x11 grid").count(),
        1,
        "{stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn json_report_carries_every_result() {
    let output = run(&["--seed", "0", "--width", "5", "--height", "5", "--json"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["optimal_cost"], 12);
    assert_eq!(report["goal"], serde_json::json!({ "row": 4, "col": 4 }));
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| r["outcome"]["kind"] == "found"));
}

#[test]
fn text_report_names_the_cheapest_search() {
    let output = run(&["--seed", "0", "--width", "5", "--height", "5"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Optimal path cost: 12"), "{stdout}");
    assert!(stdout.contains("Best by cost: breadth_first (12)"), "{stdout}");
}
