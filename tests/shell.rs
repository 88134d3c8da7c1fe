mod common;

use common::mem_store::MemStore;
use common::synthetic_image::solid_rgb;
use mini_photoshop::config::ShellConfig;
use mini_photoshop::shell::{Shell, ShellState};

fn quiet_config() -> ShellConfig {
    ShellConfig {
        image_dir: None,
        error_pause_ms: 0,
    }
}

fn run_script(store: MemStore, script: &str) -> Shell<&[u8], Vec<u8>, MemStore> {
    let mut shell = Shell::new(script.as_bytes(), Vec::new(), store, quiet_config());
    shell.run().unwrap();
    shell
}

fn transcript(shell: &Shell<&[u8], Vec<u8>, MemStore>) -> String {
    String::from_utf8(shell.output().clone()).unwrap()
}

#[test]
fn exit_at_first_prompt() {
    let shell = run_script(MemStore::default(), "exit\n");
    let out = transcript(&shell);
    assert!(out.contains("Welcome to Baby Photoshop"));
    assert!(out.contains("GOOD BYE"));
    assert_eq!(shell.session().state, ShellState::Exit);
    assert!(shell.session().image.is_none());
}

#[test]
fn purple_then_save() {
    let store = MemStore::default().with("in.png", solid_rgb(2, 2, [210, 100, 240]));
    let shell = run_script(store, "in.png\n5\nsave\nout.png\nno\n0\n");

    let saved = &shell.store().images["out.png"];
    assert_eq!(saved.pixel(1, 1), [255, 100, 255]);
    assert!(shell.session().saved);
    assert_eq!(shell.store().saves, vec!["out.png".to_string()]);
}

#[test]
fn bad_name_is_asked_again() {
    let store = MemStore::default().with("ok.png", solid_rgb(1, 1, [9, 9, 9]));
    let shell = run_script(store, "missing.png\nok.png\n0\n");
    let out = transcript(&shell);
    assert!(out.contains("no image named missing.png"));
    assert_eq!(shell.session().image.as_ref().unwrap().pixel(0, 0), [9, 9, 9]);
}

#[test]
fn invalid_menu_entries_reprompt() {
    let store = MemStore::default().with("a", solid_rgb(1, 1, [30, 60, 90]));
    let shell = run_script(store, "a\n9\nx\n1\ndiscard\nno\n0\n");
    let out = transcript(&shell);
    assert_eq!(out.matches("Please enter a valid choice").count(), 2);
    assert_eq!(shell.session().image.as_ref().unwrap().pixel(0, 0), [60; 3]);
    assert!(!shell.session().saved);
}

#[test]
fn brighten_rejects_out_of_range_percent() {
    let store = MemStore::default().with("a", solid_rgb(1, 1, [200, 100, 10]));
    let shell = run_script(store, "a\n4\n1\n150\nlots\n50\ndiscard\nno\n0\n");
    let out = transcript(&shell);
    assert!(out.contains("Please enter a valid number between 0 and 100."));
    assert!(out.contains("Invalid input. Please enter a valid number."));
    assert_eq!(
        shell.session().image.as_ref().unwrap().pixel(0, 0),
        [255, 150, 15]
    );
}

#[test]
fn merge_retries_second_name_then_averages() {
    let store = MemStore::default()
        .with("a", solid_rgb(3, 2, [100; 3]))
        .with("b", solid_rgb(2, 4, [50; 3]));
    let shell = run_script(store, "a\n3\nnope\nb\n2\ndiscard\nno\n0\n");
    let image = shell.session().image.as_ref().unwrap();
    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.pixel(1, 1), [75; 3]);
    assert!(transcript(&shell).contains("no image named nope"));
}

#[test]
fn failed_save_asks_for_another_name() {
    let store = MemStore::default().with("a", solid_rgb(1, 1, [1, 2, 3]));
    let shell = run_script(store, "a\n1\nsave\nreadonly/x.png\nfine.png\nno\n0\n");
    assert!(transcript(&shell).contains("cannot write readonly/x.png"));
    assert_eq!(shell.store().saves, vec!["fine.png".to_string()]);
    assert!(shell.session().saved);
}

#[test]
fn loading_a_new_image_replaces_the_current_one() {
    let store = MemStore::default()
        .with("first", solid_rgb(1, 1, [10, 10, 10]))
        .with("second", solid_rgb(4, 4, [0, 0, 0]));
    let shell = run_script(store, "first\n2\nsave\nedges.png\nYES\nsecond\n0\n");
    assert_eq!(shell.store().saves, vec!["edges.png".to_string()]);
    let image = shell.session().image.as_ref().unwrap();
    assert_eq!(image.dimensions(), (4, 4));
    assert!(!shell.session().saved);
}

#[test]
fn rejected_merge_keeps_image_and_returns_to_menu() {
    let store = MemStore::default()
        .with("a", solid_rgb(2, 2, [40, 80, 120]))
        .with("blank", solid_rgb(0, 3, [0; 3]));
    let shell = run_script(store, "a\n3\nblank\n1\n1\ndiscard\nno\n0\n");
    assert!(transcript(&shell).contains("invalid dimensions 0x3"));
    let image = shell.session().image.as_ref().unwrap();
    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.pixel(1, 1), [80; 3]);
    assert_eq!(shell.session().state, ShellState::Exit);
}

#[test]
fn end_of_input_exits_cleanly() {
    let store = MemStore::default().with("a", solid_rgb(1, 1, [1, 1, 1]));
    let shell = run_script(store, "a\n\n\n5\n");
    assert_eq!(shell.session().state, ShellState::Exit);
    assert!(!shell.session().saved);
    assert!(transcript(&shell).ends_with("| GOOD BYE |\n------------\n"));
}
