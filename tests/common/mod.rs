// ==============================================================================
// Shared Test Helpers
// ==============================================================================
//
// Common utility functions used across multiple integration test files.
//
// Each test file that imports this module compiles its own copy, so not every
// function is used in every binary. Suppress the resulting dead_code warnings.
#![allow(dead_code)]
// Import this module in each test file with:
//
//     mod common;
//     use common::{render_diagnostic, sample_protocol};

use miette::{GraphicalReportHandler, GraphicalTheme};
use protoschema::{
    Enumeration, Field, Import, KeyType, Map, Message, OneOf, Protocol, Range, RepeatableField,
    ReservedLabels, ReservedNumber, ReservedNumbers, Rpc, Service, TypedField, ValueType,
};

/// Render a single diagnostic to a deterministic string for snapshot tests.
/// Uses non-unicode theme at 80 columns.
pub fn render_diagnostic(error: protoschema::Error) -> String {
    let report = miette::Report::new(error);
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::none()).with_width(80);
    let mut buf = String::new();
    handler
        .render_report(&mut buf, report.as_ref())
        .expect("render to String is infallible");
    buf
}

/// A message with one member of every kind a message accepts, plus a nested
/// enumeration and a nested message.
pub fn sample_message() -> Message {
    let mut status = Enumeration::new("Status").unwrap().with_allow_alias(true);
    status
        .fields
        .assign([
            Field::new(0, "UNKNOWN").unwrap(),
            Field::new(1, "STARTED").unwrap(),
            Field::new(1, "RUNNING").unwrap(),
        ])
        .unwrap();

    let mut detail = Message::new("Detail").unwrap();
    detail
        .fields
        .append(RepeatableField::new(ValueType::Bytes, 1, "payload").unwrap())
        .unwrap();

    let mut choice = OneOf::new("choice").unwrap();
    choice
        .fields
        .append(TypedField::new(ValueType::Float, 5, "ratio").unwrap())
        .unwrap();
    choice
        .fields
        .append(TypedField::new(&detail, 6, "detail").unwrap())
        .unwrap();

    let mut message = Message::new("Job").unwrap();
    message
        .fields
        .append(RepeatableField::new(KeyType::Int64, 1, "id").unwrap())
        .unwrap();
    message
        .fields
        .append(RepeatableField::new(&status, 2, "status").unwrap())
        .unwrap();
    message
        .fields
        .append(
            RepeatableField::new(KeyType::String, 3, "tags")
                .unwrap()
                .with_repeated(true)
                .with_deprecated(true),
        )
        .unwrap();
    message
        .fields
        .append(Map::new(KeyType::String, &detail, 4, "details").unwrap())
        .unwrap();
    message.fields.append(choice).unwrap();
    message
        .fields
        .append(
            ReservedNumbers::from_numbers([
                ReservedNumber::from(7u32),
                Range::new(9, 11).unwrap().into(),
            ])
            .unwrap(),
        )
        .unwrap();
    message
        .fields
        .append(ReservedLabels::from_labels(["legacy", "old_id"]).unwrap())
        .unwrap();
    message.container.definitions.append(status).unwrap();
    message.container.definitions.append(detail).unwrap();
    message
}

/// A protocol exercising every section of the printed output.
pub fn sample_protocol() -> Protocol {
    let job = sample_message();
    let mut lookup = Message::new("Lookup").unwrap();
    lookup
        .fields
        .append(RepeatableField::new(KeyType::Int64, 1, "id").unwrap())
        .unwrap();

    let mut service = Service::new("Jobs").unwrap();
    service
        .rpcs
        .push(Rpc::new("GetJob", &lookup, &job).unwrap());
    service.rpcs.push(
        Rpc::new("WatchJobs", &lookup, &job)
            .unwrap()
            .with_stream_response(true),
    );

    let mut protocol = Protocol::new();
    protocol.set_package("scheduler").unwrap();
    protocol.imports.push(Import::new("google/protobuf/empty.proto"));
    protocol.imports.push(Import::public("shared/common.proto"));
    protocol.services.push(service);
    protocol.container.definitions.append(lookup).unwrap();
    protocol.container.definitions.append(job).unwrap();
    protocol
}
