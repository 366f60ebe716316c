//! Tool descriptors and their request/response types

use crate::core::DocumentInfo;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A callable tool as declared to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of the tool's arguments
    pub input_schema: Value,
}

/// Name of the listing tool for a server
pub fn list_tool_name(server_name: &str) -> String {
    format!("list_{}_markdown_files", server_name)
}

/// Name of the reading tool for a server
pub fn read_tool_name(server_name: &str) -> String {
    format!("read_{}_markdown_file", server_name)
}

/// Descriptor of the listing tool
pub fn list_tool(server_name: &str) -> ToolDefinition {
    ToolDefinition {
        name: list_tool_name(server_name),
        description: format!("List all markdown files managed by {}", server_name),
        input_schema: json!({ "type": "object" }),
    }
}

/// Descriptor of the reading tool
pub fn read_tool(server_name: &str) -> ToolDefinition {
    ToolDefinition {
        name: read_tool_name(server_name),
        description: format!("Read a markdown file managed by {}", server_name),
        input_schema: json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "The path to the markdown file",
                },
            },
            "required": ["path"],
        }),
    }
}

/// Arguments of the listing tool (none)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMarkdownFilesRequest {}

/// Result of the listing tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMarkdownFilesResponse {
    pub files: Vec<DocumentInfo>,
}

/// Arguments of the reading tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadMarkdownFileRequest {
    /// Logical path of the document
    pub path: String,
}

impl ReadMarkdownFileRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Result of a resource read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadResourceResult {
    pub contents: Vec<TextResourceContents>,
}

/// Text content of one resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResourceContents {
    pub uri: String,
    pub text: String,
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names() {
        assert_eq!(list_tool("docs").name, "list_docs_markdown_files");
        assert_eq!(read_tool("docs").name, "read_docs_markdown_file");
        assert_eq!(
            read_tool("docs").description,
            "Read a markdown file managed by docs"
        );
    }

    #[test]
    fn test_read_tool_schema_requires_path() {
        let schema = read_tool("docs").input_schema;
        assert_eq!(schema["required"], json!(["path"]));
        assert_eq!(schema["properties"]["path"]["type"], "string");
    }

    #[test]
    fn test_requests_deserialize() {
        let request: ReadMarkdownFileRequest =
            serde_json::from_value(json!({ "path": "dir/file2.md" })).unwrap();
        assert_eq!(request, ReadMarkdownFileRequest::new("dir/file2.md"));

        let request: ListMarkdownFilesRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request, ListMarkdownFilesRequest::default());
    }
}
