/// JSON-RPC sessions against an in-memory reader/writer pair
use habit_tracker_core::*;
use chrono::NaiveDate;
use serde_json::{json, Value};

fn server() -> HabitTrackerServer {
    let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
    HabitTrackerServer::with_clock(1, Box::new(FixedClock::new(today)))
}

/// Feed requests (one per line) and collect the parsed responses
async fn run_session(requests: &[Value]) -> Vec<Value> {
    let input = requests
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let mut output = Vec::new();

    server()
        .serve(input.as_bytes(), &mut output)
        .await
        .expect("session should finish cleanly");

    String::from_utf8(output)
        .expect("responses are UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each response line is JSON"))
        .collect()
}

fn call(id: u64, tool: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": tool, "arguments": arguments}
    })
}

#[tokio::test]
async fn test_initialize_and_list_tools() {
    let responses = run_session(&[
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
    ])
    .await;

    // the notification gets no response
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");

    let names: Vec<&str> = responses[1]["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["habit_create", "habit_list", "habit_get", "habit_rename", "habit_delete", "habit_mark", "habit_stats"]
    );
}

#[tokio::test]
async fn test_create_mark_and_stats() {
    let responses = run_session(&[
        call(1, "habit_create", json!({"name": "  Бег "})),
        call(2, "habit_mark", json!({"habit_id": 1})),
        call(3, "habit_mark", json!({"habit_id": 1})),
        call(4, "habit_stats", json!({"habit_id": 1})),
        call(5, "habit_create", json!({"name": "бег"})),
    ])
    .await;

    assert_eq!(responses.len(), 5);

    let created = &responses[0]["result"];
    assert_eq!(created["isError"], false);
    assert_eq!(created["structuredContent"]["habit"]["name"], "Бег");
    assert_eq!(created["structuredContent"]["habit"]["id"], 1);

    let marked = &responses[1]["result"]["structuredContent"];
    assert_eq!(marked["last_marked_at"], "2025-05-20");
    assert_eq!(marked["current_streak"], 1);

    let again = &responses[2]["result"];
    assert_eq!(again["isError"], true);
    assert_eq!(again["structuredContent"]["code"], -32002);

    let stats = &responses[3]["result"]["structuredContent"]["stats"];
    assert_eq!(stats["total_marks"], 1);
    assert_eq!(stats["success_rate"], 100.0);
    assert_eq!(stats["last_dates"], json!(["2025-05-20"]));

    let conflict = &responses[4]["result"];
    assert_eq!(conflict["isError"], true);
    assert_eq!(conflict["structuredContent"]["code"], -32005);
}

#[tokio::test]
async fn test_rename_delete_and_not_found() {
    let responses = run_session(&[
        call(1, "habit_create", json!({"name": "Read"})),
        call(2, "habit_rename", json!({"habit_id": 1, "name": "   "})),
        call(3, "habit_rename", json!({"habit_id": 1, "name": "Read books"})),
        call(4, "habit_delete", json!({"habit_id": 1})),
        call(5, "habit_get", json!({"habit_id": 1})),
        call(6, "habit_list", json!({})),
    ])
    .await;

    assert_eq!(responses[1]["result"]["structuredContent"]["code"], -32003);
    assert_eq!(responses[2]["result"]["structuredContent"]["habit"]["name"], "Read books");
    assert_eq!(responses[3]["result"]["isError"], false);
    assert_eq!(responses[4]["result"]["structuredContent"]["code"], -32001);
    assert_eq!(responses[5]["result"]["structuredContent"]["summary"]["total_habits"], 0);
}

#[tokio::test]
async fn test_protocol_errors() {
    let input = [
        "not json".to_string(),
        json!({"jsonrpc": "2.0", "id": 1, "method": "resources/list"}).to_string(),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call"}).to_string(),
        call(3, "habit_fly", json!({})).to_string(),
        call(4, "habit_mark", json!({"habit_id": "one"})).to_string(),
        json!({"jsonrpc": "1.0", "id": 5, "method": "ping"}).to_string(),
    ]
    .join("\n");
    let mut output = Vec::new();
    server().serve(input.as_bytes(), &mut output).await.unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(responses.len(), 6);
    assert_eq!(responses[0]["error"]["code"], -32700);
    assert_eq!(responses[1]["error"]["code"], -32601);
    assert_eq!(responses[2]["error"]["code"], -32602);
    assert_eq!(responses[3]["error"]["code"], -32602);
    assert_eq!(responses[4]["result"]["isError"], true);
    assert_eq!(responses[4]["result"]["structuredContent"]["code"], -32602);
    assert_eq!(responses[5]["error"]["code"], -32600);
}

#[tokio::test]
async fn test_null_id_gets_a_response() {
    let responses = run_session(&[
        json!({"jsonrpc": "2.0", "id": null, "method": "ping"}),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        json!({"jsonrpc": "2.0", "id": 7, "method": "ping"}),
    ])
    .await;

    // only the member-less notification goes unanswered
    assert_eq!(responses.len(), 2);
    assert!(responses[0]["id"].is_null());
    assert_eq!(responses[0]["result"], json!({}));
    assert_eq!(responses[1]["id"], 7);
}
