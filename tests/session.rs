//! Whole sessions with an assistant that stores its tasks in a real file

use std::path::Path;

use simba::config::Config;
use simba::storage::FileStorage;
use simba::Assistant;

fn open(path: &Path) -> Assistant<FileStorage> {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = Config { storage_path: path.to_path_buf(), ..Config::default() };
    let storage = FileStorage::new(&config.storage_path);
    Assistant::new(config, storage)
}

#[test]
fn test_scenarios() {
    let dir = tempfile::tempdir().unwrap();
    let mut simba = open(&dir.path().join("simba.txt"));

    let reply = simba.respond("todo buy milk").text;
    assert!(reply.contains("Added"));
    assert!(reply.contains("[T] [ ] buy milk"));
    assert_eq!(simba.tasks().len(), 1);

    let reply = simba.respond("deadline submit report /by 10-02-2025 2359").text;
    assert!(reply.contains("[D] [ ] submit report (by: 10 Feb 2025 23:59)"));

    let reply = simba.respond("event team sync /from 05-02-2025 1000 /to 05-02-2025 0900").text;
    assert_eq!(reply, "Start date should be before end date.");
    assert_eq!(simba.tasks().len(), 2);

    let reply = simba.respond("find sync").text;
    assert_eq!(reply, "There are no matching tasks in the list");
    simba.respond("event team sync /from 05-02-2025 1000 /to 05-02-2025 1100");
    let reply = simba.respond("find sync").text;
    assert_eq!(reply, "Here are the matching task(s):\n\t2. [E] [ ] team sync (from: 05 Feb 2025 10:00 to: 05 Feb 2025 11:00)");
    assert!(reply.contains("buy milk") == false);

    let reply = simba.respond("mark 5").text;
    assert_eq!(reply, "Task of this number does not exist");
    let reply = simba.respond("delete 4").text;
    assert_eq!(reply, "Task of this number does not exist");
    assert_eq!(simba.tasks().len(), 3);
}

#[test]
fn test_mark_then_unmark() {
    let dir = tempfile::tempdir().unwrap();
    let mut simba = open(&dir.path().join("simba.txt"));

    simba.respond("todo water plants");
    let before = simba.tasks().tasks()[0].to_string();

    assert_eq!(simba.respond("mark 1").text, "Alright! This task is done: [T] [X] water plants");
    assert_eq!(simba.respond("unmark 1").text, "Okay! This task is not done: [T] [ ] water plants");
    assert_eq!(simba.tasks().tasks()[0].to_string(), before);
}

#[test]
fn test_tasks_survive_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simba.txt");

    {
        let mut simba = open(&path);
        assert_eq!(simba.respond("list").text, "Task list is empty");
        simba.respond("todo walk dog");
        simba.respond("event trip /from 01-03-2025 0800 /to 03-03-2025 2000");
        simba.respond("mark 2");
        assert!(simba.respond("bye").exit);
    }

    let expected = "1. [E] [ ] trip (from: 01 Mar 2025 08:00 to: 03 Mar 2025 20:00)\n2. [T] [X] walk dog\n";
    assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);

    let mut simba = open(&path);
    assert_eq!(simba.tasks().len(), 2);
    assert_eq!(simba.respond("list").text, expected.trim_end());
    assert_eq!(simba.respond("todo walk dog").text, "This task already exists");

    let reply = simba.respond("delete 1").text;
    assert_eq!(reply, "Deleted task: [E] [ ] trip (from: 01 Mar 2025 08:00 to: 03 Mar 2025 20:00)\nNow you have 1 task(s) in the list");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1. [T] [X] walk dog\n");
}

#[test]
fn test_corrupted_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simba.txt");
    std::fs::write(&path, "this is not a task list\n").unwrap();

    let mut simba = open(&path);
    assert!(simba.tasks().is_empty());
    simba.respond("todo start over");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1. [T] [ ] start over\n");
}
