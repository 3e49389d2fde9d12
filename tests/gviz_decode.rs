// tests/gviz_decode.rs
//
// The gviz decoder against well-formed and malformed wrapper inputs.

use dairyscan::core::gviz;

fn wrap(inner: &str) -> String {
    format!(
        "/*O_o*/\ngoogle.visualization.Query.setResponse({});",
        inner
    )
}

const TABLE_JSON: &str = r#"{
  "version":"0.6","reqId":"0","status":"ok",
  "table":{
    "cols":[
      {"id":"A","label":"Timestamp","type":"datetime"},
      {"id":"B","label":"Date","type":"string"},
      {"id":"C","label":"Fat","type":"string"}
    ],
    "rows":[
      {"c":[{"v":"Date(2026,1,2)"},{"v":"02 Feb 2026"},{"v":"6.4%"}]},
      {"c":[null,{"v":"03 Feb 2026"},{"v":6.1,"f":"6.1%"}]}
    ]
  }
}"#;

#[test]
fn decodes_wrapped_payload() {
    let table = gviz::decode(&wrap(TABLE_JSON)).expect("decode");
    assert_eq!(table.cols.len(), 3);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cols[1].label, "Date");
}

#[test]
fn decodes_without_trailing_semicolon() {
    let body = format!("google.visualization.Query.setResponse({})", TABLE_JSON);
    assert!(gviz::decode(&body).is_ok());
}

#[test]
fn rejects_missing_wrapper() {
    // Raw JSON without the callback is not what the endpoint sends;
    // treat it as a payload-shape failure.
    let err = gviz::decode(TABLE_JSON).unwrap_err();
    assert!(err.to_string().contains("wrapper"));
}

#[test]
fn rejects_non_json_payload() {
    let body = wrap("<html>service unavailable</html>");
    assert!(gviz::decode(&body).is_err());
}

#[test]
fn rejects_empty_body() {
    assert!(gviz::decode("").is_err());
}

#[test]
fn cell_text_prefers_formatted_value() {
    let table = gviz::decode(&wrap(TABLE_JSON)).unwrap();
    // second row, fat column: v=6.1 (number), f="6.1%"
    assert_eq!(table.rows[1].cell_text(2).as_deref(), Some("6.1%"));
    // numbers without f stringify
    assert_eq!(table.rows[0].cell_text(2).as_deref(), Some("6.4%"));
    // null cell
    assert_eq!(table.rows[1].cell_text(0), None);
    // out of range
    assert_eq!(table.rows[0].cell_text(9), None);
}

#[test]
fn tolerates_table_with_no_rows() {
    let inner = r#"{"table":{"cols":[{"label":"Date"}],"rows":[]}}"#;
    let table = gviz::decode(&wrap(inner)).unwrap();
    assert!(table.rows.is_empty());
}
