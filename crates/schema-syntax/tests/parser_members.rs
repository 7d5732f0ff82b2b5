mod common;
use common::*;

fn field_type_text(source: &str) -> String {
    let parsed = parse(source);
    assert!(parsed.ok(), "{:?}", parsed.errors());
    let field_type = find(&parsed.syntax(), SyntaxKind::FieldType).expect("field type");
    text(&field_type)
}

// Type names
#[test]
fn test_generic_field_definition() {
    let parsed = parse("type T { Map<EntityId, float> positions = 1; }");
    assert!(parsed.ok(), "{:?}", parsed.errors());

    let root = parsed.syntax();
    let fields = find_all(&root, SyntaxKind::FieldDefinition);
    assert_eq!(fields.len(), 1);

    let field = &fields[0];
    assert_eq!(
        child_kinds(field),
        vec![
            SyntaxKind::FieldType,
            SyntaxKind::FieldName,
            SyntaxKind::FieldNumber
        ]
    );
    assert_eq!(
        text(&find(field, SyntaxKind::FieldType).expect("type")),
        "Map<EntityId, float>"
    );
    assert_eq!(
        text(&find(field, SyntaxKind::FieldName).expect("name")),
        "positions"
    );
    assert_eq!(
        text(&find(field, SyntaxKind::FieldNumber).expect("number")),
        "1"
    );

    let field_type = find(field, SyntaxKind::FieldType).expect("type");
    assert_eq!(
        child_kinds(&field_type),
        vec![
            SyntaxKind::TypeName,
            SyntaxKind::TypeParameterName,
            SyntaxKind::TypeParameterName
        ]
    );
}

#[test]
fn test_rendered_type_name_in_messages() {
    assert_eq!(
        error_messages("type T { Map<EntityId,float> positions }"),
        vec!["Expected '=' after 'Map<EntityId, float> positions'."]
    );
}

#[test]
fn test_simple_field_type() {
    assert_eq!(field_type_text("type T { int32 x = 1; }"), "int32");
    assert_eq!(
        field_type_text("type T { improbable.Coordinates c = 1; }"),
        "improbable.Coordinates"
    );
}

#[test]
fn test_option_as_generic_type_name() {
    let parsed = parse("type T { option<int32> maybe = 1; }");
    assert!(parsed.ok(), "{:?}", parsed.errors());
    assert!(find(&parsed.syntax(), SyntaxKind::OptionDefinition).is_none());
    assert_eq!(
        field_type_text("type T { option<int32> maybe = 1; }"),
        "option<int32>"
    );
}

#[test]
fn test_option_statement_inside_body() {
    let parsed = parse("component C { option synchronized = true; id = 1; }");
    assert!(parsed.ok(), "{:?}", parsed.errors());
    let option = find(&parsed.syntax(), SyntaxKind::OptionDefinition).expect("option");
    assert_eq!(text(&option), "option synchronized = true;");
}

#[test]
fn test_type_name_errors() {
    assert_eq!(
        error_messages("type T { list< = 1; }"),
        vec!["Expected typename after 'list<'."]
    );
    assert_eq!(
        error_messages("type T { map<a, > x = 1; }"),
        vec!["Expected typename after ','."]
    );
    assert_eq!(
        error_messages("type T { map<a b> x = 1; }"),
        vec!["Invalid 'b' inside <>."]
    );
    assert_eq!(
        error_messages("type T { list<a"),
        vec!["Invalid '<EOF>' inside <>.", "Invalid '<EOF>' inside type T."]
    );
}

#[test]
fn test_failed_type_name_keeps_parts_in_field() {
    let parsed = parse("type T { map<a b> x = 1; }");
    let field = find(&parsed.syntax(), SyntaxKind::FieldDefinition).expect("field");
    assert!(find(&field, SyntaxKind::FieldType).is_none());
    assert_eq!(
        child_kinds(&field),
        vec![SyntaxKind::TypeName, SyntaxKind::TypeParameterName]
    );
}

// Statement messages
#[test]
fn test_field_messages() {
    let cases = [
        ("type T { int32 ; }", "Expected field name after 'int32'."),
        ("type T { int32 x ; }", "Expected '=' after 'int32 x'."),
        ("type T { int32 x = ; }", "Expected field number after 'int32 x = '."),
        ("type T { int32 x = 1 }", "Expected ';' after 'int32 x = 1'."),
    ];
    for (source, message) in cases {
        assert_eq!(error_messages(source), vec![message], "{source}");
    }
}

#[test]
fn test_enum_value_messages() {
    let cases = [
        ("enum E { A ; }", "Expected '=' after 'A'."),
        ("enum E { A = ; }", "Expected integer enum value after 'A = '."),
        ("enum E { A = -3 }", "Expected ';' after 'A = -3'."),
    ];
    for (source, message) in cases {
        assert_eq!(error_messages(source), vec![message], "{source}");
    }
}

#[test]
fn test_enum_value_recovery_continues() {
    let parsed = parse("enum E { A ; B = 2; }");
    assert_eq!(parsed.errors().len(), 1);
    let values = find_all(&parsed.syntax(), SyntaxKind::EnumValueDefinition);
    assert_eq!(values.len(), 2);
    assert_eq!(text(&values[1]), "B = 2;");
}

#[test]
fn test_component_member_messages() {
    let cases = [
        ("component C { id ; }", "Expected '=' after 'id'."),
        ("component C { id = ; }", "Expected integer ID value after 'id = '."),
        ("component C { id = 5 }", "Expected ';' after 'id = 5'."),
        ("component C { data ; }", "Expected typename after 'data'."),
        ("component C { data T }", "Expected ';' after 'data T'."),
        ("component C { event ; }", "Expected typename after 'event'."),
        ("component C { event T ; }", "Expected field name after 'event T'."),
        ("component C { event T e }", "Expected ';' after 'event T e'."),
        (
            "component C { command ; }",
            "Expected command response after 'command'.",
        ),
        (
            "component C { command R ; }",
            "Expected command name after 'command R'.",
        ),
        (
            "component C { command R c ; }",
            "Expected '(' after 'command R c'.",
        ),
        (
            "component C { command R c( ; }",
            "Expected command request after 'command R c('.",
        ),
        (
            "component C { command R c(Q ; }",
            "Expected ')' after 'command R c(Q'.",
        ),
        (
            "component C { command R c(Q) }",
            "Expected ';' after 'command R c(Q)'.",
        ),
    ];
    for (source, message) in cases {
        let parsed = parse(source);
        let messages: Vec<_> = parsed.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec![message], "{source}");
        let component = find(&parsed.syntax(), SyntaxKind::ComponentDefinition)
            .expect("component survives");
        assert_eq!(text(&component), source, "{source}");
    }
}

#[test]
fn test_command_definition_nodes() {
    let parsed = parse("component C { command Response do_it(Request); }");
    assert!(parsed.ok(), "{:?}", parsed.errors());
    let command = find(&parsed.syntax(), SyntaxKind::CommandDefinition).expect("command");
    assert_eq!(
        child_kinds(&command),
        vec![
            SyntaxKind::Keyword,
            SyntaxKind::TypeName,
            SyntaxKind::CommandName,
            SyntaxKind::TypeName
        ]
    );
}

#[test]
fn test_event_with_generic_type() {
    let parsed = parse("component C { event list<Hit> hits; }");
    assert!(parsed.ok(), "{:?}", parsed.errors());
    let event = find(&parsed.syntax(), SyntaxKind::EventDefinition).expect("event");
    assert_eq!(
        child_kinds(&event),
        vec![
            SyntaxKind::Keyword,
            SyntaxKind::FieldType,
            SyntaxKind::FieldName
        ]
    );
}

#[test]
fn test_simple_statement_messages() {
    let cases = [
        ("package ;", "Expected a package name after 'package'."),
        ("package a", "Expected ';' after package definition."),
        ("import ;", "Expected a quoted filename after 'import'."),
        ("import \"a.schema\"", "Expected ';' after 'import \"a.schema\"'."),
        ("option ;", "Expected identifier after 'option'."),
        ("option a ;", "Expected '=' after 'option a'."),
        ("option a = ;", "Expected option value after 'option a = '."),
        ("option a = b", "Expected ';' after 'option a = b'."),
    ];
    for (source, message) in cases {
        assert_eq!(error_messages(source), vec![message], "{source}");
    }
}

#[test]
fn test_block_messages() {
    let cases = [
        ("type { }", "Expected identifier after 'type'."),
        ("component C ; }", "Expected '{' after 'component C'."),
        ("type T { 5 }", "Invalid '5' inside type T."),
        ("enum E { A = 1;", "Invalid '<EOF>' inside enum E."),
    ];
    for (source, message) in cases {
        assert_eq!(error_messages(source), vec![message], "{source}");
    }
}
