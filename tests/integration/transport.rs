/// JSON-RPC over an in-memory line stream
use serde_json::{json, Value};
use solana_mcp_server::config::Config;
use solana_mcp_server::mcp::McpServer;
use solana_mcp_server::SolanaMcpServer;

async fn exchange(requests: &[Value]) -> Vec<Value> {
    let input: String = requests.iter().map(|r| format!("{}\n", r)).collect();
    let mut output = Vec::new();

    let server = SolanaMcpServer::new(Config::from_lookup(|_| None)).expect("Failed to create server");
    let mut mcp = McpServer::new(server);
    mcp.serve(input.as_bytes(), &mut output)
        .await
        .expect("serve failed");

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_session() {
    let responses = exchange(&[
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {"protocolVersion": "2024-11-05"}}),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {"name": "nonexistent_tool", "arguments": {}}}),
        json!({"jsonrpc": "2.0", "id": 4, "method": "no/such/method"}),
    ])
    .await;

    // The notification gets no response
    assert_eq!(responses.len(), 4);

    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "Solana MCP Server");

    let tools = responses[1]["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 7);
    assert!(tools.iter().all(|t| t.get("inputSchema").is_some()));

    assert_eq!(responses[2]["result"]["isError"], true);
    assert_eq!(
        responses[2]["result"]["content"][0]["text"],
        "Unknown tool: nonexistent_tool"
    );

    assert_eq!(responses[3]["error"]["code"], -32601);
}

#[tokio::test]
async fn test_create_wallet_over_the_wire() {
    let responses = exchange(&[json!({
        "jsonrpc": "2.0",
        "id": "w",
        "method": "tools/call",
        "params": {"name": "create_wallet"}
    })])
    .await;

    let text = responses[0]["result"]["content"][0]["text"].as_str().unwrap();
    let wallet: Value = serde_json::from_str(text).unwrap();
    assert!(wallet["public_key"].is_string());
    assert_eq!(responses[0]["result"]["isError"], false);
}
