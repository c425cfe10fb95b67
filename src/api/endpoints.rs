use reqwest::Method;

/// Backend routes consumed by the client, relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ToolCallHandler,
    ListBlobs,
    ReadBlobFile,
    InteractionHistory,
    AddNewData,
    GetFilteredData,
    CreateUser,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ToolCallHandler => "tool_call_handler",
            Endpoint::ListBlobs => "list_blobs",
            Endpoint::ReadBlobFile => "read_blob_file",
            Endpoint::InteractionHistory => "get_interaction_history",
            Endpoint::AddNewData => "add_new_data",
            Endpoint::GetFilteredData => "get_filtered_data",
            Endpoint::CreateUser => "create_user",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::InteractionHistory => Method::GET,
            _ => Method::POST,
        }
    }
}
