// ==============================================================================
// Printing Tests
// ==============================================================================
//
// These tests build declaration trees through the public API and compare the
// printed IDL text against the exact expected output. Larger outputs are kept
// as inline `insta` snapshots so that layout changes are reviewed explicitly.

mod common;

use pretty_assertions::assert_eq;
use protoschema::{
    Enumeration, Field, KeyType, Message, Print, Printer, Protocol, RepeatableField, indent,
};

use common::{sample_message, sample_protocol};

// ==============================================================================
// End-to-End Scenarios
// ==============================================================================

#[test]
fn test_message_with_plain_and_deprecated_fields() {
    let mut message = Message::new("MyMessage").unwrap();
    message
        .fields
        .assign([
            RepeatableField::new(KeyType::Int32, 1, "broogle").unwrap(),
            RepeatableField::new(KeyType::Uint64, 5, "doingle")
                .unwrap()
                .with_deprecated(true),
        ])
        .unwrap();

    assert_eq!(
        message.to_string(),
        "message MyMessage {\n  int32 broogle = 1;\n  uint64 doingle = 5 [deprecated=true];\n}"
    );
}

#[test]
fn test_enumeration_keeps_insertion_order() {
    let mut e = Enumeration::new("MyEnum").unwrap();
    e.fields
        .assign([
            Field::new(0, "default").unwrap(),
            Field::new(1, "some").unwrap(),
            Field::new(2, "thing").unwrap(),
        ])
        .unwrap();
    assert_eq!(
        e.to_string(),
        "enum MyEnum {\n  default = 0;\n  some = 1;\n  thing = 2;\n}"
    );

    e.fields.insert(0, Field::new(3, "last_number").unwrap()).unwrap();
    assert_eq!(
        e.to_string(),
        "enum MyEnum {\n  last_number = 3;\n  default = 0;\n  some = 1;\n  thing = 2;\n}"
    );
}

#[test]
fn test_protocol_with_package_and_one_definition() {
    let mut protocol = Protocol::new();
    protocol.set_package("testpackage").unwrap();
    protocol
        .container
        .definitions
        .append(Message::new("Empty").unwrap())
        .unwrap();

    assert_eq!(
        protocol.to_string(),
        "syntax = \"proto3\";\n\npackage testpackage;\n\nmessage Empty {}"
    );
}

#[test]
fn test_nested_message_with_every_member_kind() {
    insta::assert_snapshot!(sample_message().to_string(), @r#"
    message Job {
      int64 id = 1;
      Status status = 2;
      repeated string tags = 3 [deprecated=true];
      map<string, Detail> details = 4;
      oneof choice {
        float ratio = 5;
        Detail detail = 6;
      }
      reserved 7, 9 to 11;
      reserved "legacy", "old_id";

      enum Status {
        option allow_alias = true;
        UNKNOWN = 0;
        STARTED = 1;
        RUNNING = 1;
      }

      message Detail {
        bytes payload = 1;
      }
    }
    "#);
}

#[test]
fn test_full_protocol() {
    insta::assert_snapshot!(sample_protocol().to_string(), @r#"
    syntax = "proto3";

    package scheduler;

    import "google/protobuf/empty.proto";
    import public "shared/common.proto";

    service Jobs {
      rpc GetJob (Lookup) returns (Job);
      rpc WatchJobs (Lookup) returns (stream Job);
    }

    message Lookup {
      int64 id = 1;
    }

    message Job {
      int64 id = 1;
      Status status = 2;
      repeated string tags = 3 [deprecated=true];
      map<string, Detail> details = 4;
      oneof choice {
        float ratio = 5;
        Detail detail = 6;
      }
      reserved 7, 9 to 11;
      reserved "legacy", "old_id";

      enum Status {
        option allow_alias = true;
        UNKNOWN = 0;
        STARTED = 1;
        RUNNING = 1;
      }

      message Detail {
        bytes payload = 1;
      }
    }
    "#);
}

// ==============================================================================
// Printer Configuration
// ==============================================================================

#[test]
fn test_display_matches_default_printer() {
    let protocol = sample_protocol();
    assert_eq!(protocol.to_string(), Printer::default().print(&protocol));
    assert_eq!(protocol.to_string(), protocol.print());
}

#[test]
fn test_tab_indentation() {
    let mut printer = Printer::new();
    printer.indent_unit("\t");
    let printed = printer.print(&sample_message());
    assert!(printed.contains("\n\toneof choice {\n\t\tfloat ratio = 5;\n"));
    assert!(!printed.contains("  "));
}

#[test]
fn test_printed_output_has_no_trailing_whitespace() {
    let printed = sample_protocol().to_string();
    for line in printed.lines() {
        assert_eq!(line, line.trim_end());
    }
    assert!(!printed.ends_with('\n'));
}

#[test]
fn test_printing_is_deterministic() {
    let protocol = sample_protocol();
    assert_eq!(protocol.to_string(), protocol.clone().to_string());
    assert_eq!(protocol.to_string(), sample_protocol().to_string());
}

#[test]
fn test_indent_reproduces_nested_layout() {
    let inner = Message::new("Inner").unwrap().to_string();
    assert_eq!(indent(&inner, 1, "  "), "\n  message Inner {}\n");
}
