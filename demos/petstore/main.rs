//! Builds the classic pet store description, prints it, and reads it back.
//!
//! Run with `RUST_LOG=debug` to see the builder's path and slot decisions.

use oasbuild::{
    ApiKeyLocation, Builder, ComponentKind, Contact, Example, Header, License, Link, Reference,
    Schema, SchemaOrRef, SecurityRequirement, SecurityScheme, Tag, from_str,
};
use serde_json::json;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let pet = Reference::component(ComponentKind::Schemas, "Pet");

    let builder = Builder::new()
        .set_title("Pet Store")
        .set_version("1.0.0")
        .set_summary(["A sample", " pet store "])
        .set_contact(Contact::new("API team", "https://example.com", "api@example.com"))
        .set_license(License::new("Apache 2.0").with_identifier("Apache-2.0"))
        .add_server("https://petstore.example.com/v1", "Production")
        .add_tag(Tag::new("pets").with_description("Everything about pets"))
        .add_schema(
            "Pet",
            Schema::object()
                .with_property("id", Schema::integer().with_format("int64"))
                .with_property("name", Schema::string())
                .with_property("tag", Schema::string().nullable())
                .with_required("id")
                .with_required("name"),
        )
        .add_security_scheme(
            "api_key",
            SecurityScheme::api_key("X-API-Key", ApiKeyLocation::Header),
        )
        .security(SecurityRequirement::scheme("api_key", Vec::<String>::new()))
        .path("/pets")
        .get("List all pets")
        .add_tag("pets")
        .set_operation_id("listPets")
        .param_query("limit", "integer", "How many items to return", false)
        .response_with_headers(
            200,
            "A paged array of pets",
            Schema::array().with_items(SchemaOrRef::from(pet.clone())),
            [("x-next", Header::new("Link to the next page", Schema::string()))],
        )
        .done_op()
        .post("Create a pet")
        .add_tag("pets")
        .set_operation_id("createPet")
        .request_json(SchemaOrRef::from(pet.clone()), true)
        .response_json(201, "Created", SchemaOrRef::from(pet.clone()))
        .example(201, "application/json", Example::with_value(json!({"id": 1, "name": "Rex"})))
        .link(
            201,
            "GetPet",
            Link::to_operation_id("showPetById").with_parameter("petId", json!("$response.body#/id")),
        )
        .done_op()
        .done_path()
        .path("/pets/{petId}")
        .get("Info for a specific pet")
        .add_tag("pets")
        .set_operation_id("showPetById")
        .param_path("petId", "string", "The id of the pet to retrieve")
        .response_json(200, "Expected response to a valid request", SchemaOrRef::from(pet))
        .response_text(404, "Not found")
        .done_op()
        .done_path();

    builder.build().validate()?;

    let json = builder.json()?;
    println!("{}", json);

    let document: oasbuild::Document = from_str(&json)?;
    log::info!(
        "Read back {} paths, {} schemas",
        document.paths.as_ref().map_or(0, |paths| paths.len()),
        document
            .components
            .as_ref()
            .map_or(0, |components| components.schemas.len())
    );
    Ok(())
}
