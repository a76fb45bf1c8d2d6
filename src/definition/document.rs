use crate::{
    error::DocumentError,
    models::{CreatePersonRequest, CreatePersonResponse},
    routes::OPERATION_CREATE_PERSON,
};
use serde_json::{json, Value};
use tracing::debug;
use utoipa::openapi::{
    path::{OperationBuilder, PathItem, PathItemType},
    request_body::RequestBodyBuilder,
    security::{ApiKey, ApiKeyValue, SecurityRequirement, SecurityScheme},
    ComponentsBuilder, ContentBuilder, InfoBuilder, OpenApiBuilder, PathsBuilder, Ref, RefOr,
    Required, ResponseBuilder, Schema,
};
use utoipa::ToSchema;

pub const API_KEY_SCHEME: &str = "api_key";
pub const API_KEY_HEADER: &str = "x-api-key";

const JSON_CONTENT: &str = "application/json";
const INTEGRATION_EXTENSION: &str = "x-amazon-apigateway-integration";
const AUTH_EXTENSION: &str = "x-amazon-apigateway-auth";

/// Name, version and description of the managed API
#[derive(Debug, Clone)]
pub struct ApiMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// A named component schema
#[derive(Debug, Clone)]
pub struct SchemaDecl {
    pub name: String,
    pub schema: RefOr<Schema>,
}

impl SchemaDecl {
    pub fn new(name: impl Into<String>, schema: impl Into<RefOr<Schema>>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
        }
    }

    /// Declaration derived from a `ToSchema` type, registered under the type's name.
    pub fn of<T: ToSchema<'static>>() -> Self {
        let (name, schema) = T::schema();
        Self::new(name, schema)
    }

    fn reference(&self) -> Ref {
        Ref::from_schema_name(self.name.as_str())
    }
}

/// An OpenAPI definition ready to hand to the control plane
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    api_name: String,
    body: Value,
}

impl Document {
    pub fn api_name(&self) -> &str {
        &self.api_name
    }

    pub fn as_json(&self) -> &Value {
        &self.body
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.body)
    }
}

/// Assemble the definition of a single POST operation proxied to `backend_base_url`.
pub fn build_document(
    metadata: &ApiMetadata,
    operation_name: &str,
    request_schema: &SchemaDecl,
    response_schema: &SchemaDecl,
    backend_base_url: &str,
) -> Result<Document, DocumentError> {
    if request_schema.name == response_schema.name {
        return Err(DocumentError::DuplicateSchemaName(request_schema.name.clone()));
    }

    let path = format!("/{}", operation_name);

    let request_body = RequestBodyBuilder::new()
        .content(
            JSON_CONTENT,
            ContentBuilder::new().schema(request_schema.reference()).build(),
        )
        .required(Some(Required::True))
        .build();

    let response = ResponseBuilder::new()
        .description("the response")
        .content(
            JSON_CONTENT,
            ContentBuilder::new().schema(response_schema.reference()).build(),
        )
        .build();

    let operation = OperationBuilder::new()
        .operation_id(Some(operation_name))
        .request_body(Some(request_body))
        .response("200", response)
        .security(SecurityRequirement::new(API_KEY_SCHEME, Vec::<String>::new()))
        .build();

    let components = ComponentsBuilder::new()
        .schema(request_schema.name.as_str(), request_schema.schema.clone())
        .schema(response_schema.name.as_str(), response_schema.schema.clone())
        .security_scheme(
            API_KEY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
        )
        .build();

    let openapi = OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title(metadata.name.as_str())
                .version(metadata.version.as_str())
                .description(Some(metadata.description.as_str()))
                .build(),
        )
        .paths(
            PathsBuilder::new()
                .path(path.as_str(), PathItem::new(PathItemType::Post, operation))
                .build(),
        )
        .components(Some(components))
        .build();

    let mut body = serde_json::to_value(&openapi)?;

    // utoipa has no operation-level extensions, so the gateway annotations go in afterwards.
    if let Some(post) = body.pointer_mut(&format!("/paths/{}/post", escape_pointer(&path))) {
        if let Some(post) = post.as_object_mut() {
            post.insert(AUTH_EXTENSION.to_string(), json!({ "type": "NONE" }));
            post.insert(
                INTEGRATION_EXTENSION.to_string(),
                integration(backend_base_url, operation_name),
            );
        }
    }

    debug!("Built definition for {} with operation {}", metadata.name, path);

    Ok(Document {
        api_name: metadata.name.clone(),
        body,
    })
}

/// The create-person definition proxied to `backend_base_url`
pub fn person_api_document(
    metadata: &ApiMetadata,
    backend_base_url: &str,
) -> Result<Document, DocumentError> {
    build_document(
        metadata,
        OPERATION_CREATE_PERSON,
        &SchemaDecl::of::<CreatePersonRequest>(),
        &SchemaDecl::of::<CreatePersonResponse>(),
        backend_base_url,
    )
}

/// HTTP proxy integration forwarding POST calls to the backend
fn integration(backend_base_url: &str, operation_name: &str) -> Value {
    json!({
        "passthroughBehavior": "when_no_match",
        "type": "http_proxy",
        "httpMethod": "POST",
        "uri": format!("{}/{}", backend_base_url.trim_end_matches('/'), operation_name),
    })
}

// RFC 6901
fn escape_pointer(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}
