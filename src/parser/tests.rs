#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> Script {
        let script = parse_source(source);
        assert!(script.errors.is_empty(), "unexpected errors: {:?}", script.errors);
        script
    }

    // ========================================================================
    // Command declarations
    // ========================================================================

    #[test]
    fn test_minimal_command() {
        let script = parse_ok(r#"command "ping" { }"#);
        assert_eq!(script.commands.len(), 1);
        let cmd = &script.commands[0];
        assert_eq!(cmd.name, "ping");
        assert!(cmd.permission.is_empty());
        assert!(cmd.description.is_empty());
        assert!(cmd.arguments.is_empty());
        assert!(cmd.execute_block.is_none());
    }

    #[test]
    fn test_command_properties() {
        let script = parse_ok(
            r#"
            command "heal" {
                permission: "swoft.heal"
                description: "Restore a player's health"
            }
            "#,
        );
        let cmd = &script.commands[0];
        assert_eq!(cmd.permission, "swoft.heal");
        assert_eq!(cmd.description, "Restore a player's health");
    }

    #[test]
    fn test_repeated_property_last_wins() {
        let script = parse_ok(
            r#"
            command "x" {
                permission: "first"
                permission: "second"
            }
            "#,
        );
        assert_eq!(script.commands[0].permission, "second");
    }

    #[test]
    fn test_alias_list_shares_body() {
        let script = parse_ok(
            r#"
            command "tp", "teleport" {
                permission: "swoft.tp"
                execute { halt }
            }
            "#,
        );
        assert_eq!(script.commands.len(), 2);
        assert_eq!(script.commands[0].name, "tp");
        assert_eq!(script.commands[1].name, "teleport");
        for cmd in &script.commands {
            assert_eq!(cmd.permission, "swoft.tp");
            let block = cmd.execute_block.as_ref().unwrap();
            assert_eq!(block.statements, vec![Statement::Halt]);
        }
    }

    #[test]
    fn test_alias_list_with_repeated_keyword() {
        let script = parse_ok(r#"command "a", command "b" { }"#);
        assert_eq!(script.commands.len(), 2);
        assert_eq!(script.commands[0].name, "a");
        assert_eq!(script.commands[1].name, "b");
    }

    #[test]
    fn test_unknown_command_property_drops_declaration() {
        let script = parse_source(
            r#"
            command "x" { color: "red" }
            command "y" { }
            "#,
        );
        assert_eq!(script.commands.len(), 1);
        assert_eq!(script.commands[0].name, "y");
        assert_eq!(script.errors.len(), 1);
        assert!(matches!(
            &script.errors[0],
            ParseError::UnknownProperty { property, context: "command", .. } if property == "color"
        ));
    }

    #[test]
    fn test_unclosed_command_body_reports_error() {
        let script = parse_source(r#"command "x" {"#);
        assert!(script.commands.is_empty());
        assert_eq!(script.errors.len(), 1);
    }

    // ========================================================================
    // Arguments and types
    // ========================================================================

    #[test]
    fn test_arguments_block() {
        let script = parse_ok(
            r#"
            command "give" {
                arguments {
                    player: Player
                    amount: Integer = 1
                }
            }
            "#,
        );
        let args = &script.commands[0].arguments;
        assert_eq!(args.len(), 2);
        assert_eq!(args[0], Variable::new("player", DataType::Player));
        assert_eq!(args[1].name, "amount");
        assert_eq!(args[1].ty, DataType::Integer);
        assert_eq!(args[1].default_value.as_deref(), Some("1"));
    }

    #[test]
    fn test_default_value_kept_verbatim() {
        let script = parse_ok(
            r#"
            command "x" {
                arguments {
                    greeting: String = "hello"
                    count: Integer = 0005
                }
            }
            "#,
        );
        let args = &script.commands[0].arguments;
        assert_eq!(args[0].default_value.as_deref(), Some("hello"));
        assert_eq!(args[1].default_value.as_deref(), Some("0005"));
    }

    #[test]
    fn test_either_union_argument() {
        let script = parse_ok(
            r#"
            command "warp" {
                arguments {
                    target: either<Player|Location>
                }
            }
            "#,
        );
        let ty = &script.commands[0].arguments[0].ty;
        assert_eq!(*ty, DataType::Either(vec![DataType::Player, DataType::Location]));
        assert_eq!(ty.to_string(), "either<Player|Location>");
    }

    #[test]
    fn test_nested_either_union() {
        let script = parse_ok(
            r#"
            command "x" {
                arguments {
                    v: either<String|either<Integer|Double>>
                }
            }
            "#,
        );
        assert_eq!(
            script.commands[0].arguments[0].ty,
            DataType::Either(vec![
                DataType::String,
                DataType::Either(vec![DataType::Integer, DataType::Double]),
            ])
        );
    }

    #[test]
    fn test_unrecognized_type_name_is_unknown() {
        let script = parse_ok(
            r#"
            command "x" {
                arguments {
                    v: Vehicle
                }
            }
            "#,
        );
        assert_eq!(script.commands[0].arguments[0].ty, DataType::Unknown);
    }

    #[test]
    fn test_malformed_argument_skipped_neighbors_kept() {
        let script = parse_ok(
            r#"
            command "x" {
                arguments {
                    good: String
                    bad :
                    fine: Integer
                }
            }
            "#,
        );
        let args = &script.commands[0].arguments;
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "good");
        assert_eq!(args[1].name, "fine");
    }

    #[test]
    fn test_overlong_argument_line_is_capped() {
        // A runaway argument line far past the per-argument token cap must
        // not swallow the declarations around it.
        let union = (0..15).map(|i| format!("T{}", i)).collect::<Vec<_>>().join("|");
        let source = format!(
            "command \"x\" {{\n    arguments {{\n        good: String\n        bad: either<{}>\n        fine: Integer\n    }}\n}}",
            union
        );
        let script = parse_ok(&source);
        let args = &script.commands[0].arguments;
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "good");
        assert_eq!(args[1].name, "fine");
    }

    // ========================================================================
    // Events
    // ========================================================================

    #[test]
    fn test_event_declaration() {
        let script = parse_ok(
            r#"
            event PlayerJoin {
                priority: 10
                execute { cancel event }
            }
            "#,
        );
        assert_eq!(script.events.len(), 1);
        let event = &script.events[0];
        assert_eq!(event.name, "PlayerJoin");
        assert_eq!(event.priority, 10);
        assert_eq!(
            event.execute_block.as_ref().unwrap().statements,
            vec![Statement::CancelEvent]
        );
    }

    #[test]
    fn test_event_priority_defaults_to_zero() {
        let script = parse_ok("event PlayerQuit { execute { halt } }");
        assert_eq!(script.events[0].priority, 0);
    }

    #[test]
    fn test_unknown_event_property_drops_declaration() {
        let script = parse_source("event E { colour: 3 }");
        assert!(script.events.is_empty());
        assert_eq!(script.errors.len(), 1);
        assert!(matches!(
            &script.errors[0],
            ParseError::UnknownProperty { context: "event", .. }
        ));
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn only_statement(source: &str) -> Statement {
        let script = parse_ok(&format!("event E {{ execute {{ {} }} }}", source));
        let block = script.events[0].execute_block.as_ref().unwrap();
        assert_eq!(block.statements.len(), 1, "got {:?}", block.statements);
        block.statements[0].clone()
    }

    #[test]
    fn test_send_without_target() {
        let stmt = only_statement(r#"send "hello""#);
        assert_eq!(
            stmt,
            Statement::Send {
                message: Expression::StringLiteral { value: "hello".into() },
                target: None,
            }
        );
    }

    #[test]
    fn test_send_with_target() {
        let stmt = only_statement(r#"send "hello" to player"#);
        assert_eq!(
            stmt,
            Statement::Send {
                message: Expression::StringLiteral { value: "hello".into() },
                target: Some(Expression::VariableReference { name: "player".into() }),
            }
        );
    }

    #[test]
    fn test_teleport_statement() {
        let stmt = only_statement("teleport player to spawn.location");
        assert_eq!(
            stmt,
            Statement::Teleport {
                entity: Expression::VariableReference { name: "player".into() },
                target: Expression::VariableReference { name: "spawn.location".into() },
            }
        );
    }

    #[test]
    fn test_set_statement() {
        let stmt = only_statement(r#"set player.display_name to "Admin""#);
        assert_eq!(
            stmt,
            Statement::Assign {
                path: "player.display_name".into(),
                value: Expression::StringLiteral { value: "Admin".into() },
            }
        );
    }

    #[test]
    fn test_keyword_as_path_component() {
        // `event` is a keyword but valid in path position.
        let stmt = only_statement(r#"set event.cancelled to "true""#);
        assert_eq!(
            stmt,
            Statement::Assign {
                path: "event.cancelled".into(),
                value: Expression::StringLiteral { value: "true".into() },
            }
        );
    }

    #[test]
    fn test_nested_block_statement() {
        let stmt = only_statement("{ halt }");
        assert_eq!(stmt, Statement::Block { statements: vec![Statement::Halt] });
    }

    #[test]
    fn test_stray_token_in_execute_block_skipped() {
        let script = parse_ok("event E { execute { : halt } }");
        assert_eq!(
            script.events[0].execute_block.as_ref().unwrap().statements,
            vec![Statement::Halt]
        );
    }

    #[test]
    fn test_if_else_if_chain() {
        let stmt = only_statement(
            r#"if kind == "a" { halt } else if kind == "b" { cancel event } else { send "other" }"#,
        );
        let Statement::If { else_branch: Some(else_branch), .. } = stmt else {
            panic!("expected if statement with else branch");
        };
        let Statement::If { condition, then_branch, else_branch: Some(final_else) } = *else_branch
        else {
            panic!("expected else-if to nest as an if statement");
        };
        assert_eq!(
            condition,
            Expression::binary(
                Expression::VariableReference { name: "kind".into() },
                BinaryOp::Equals,
                Expression::StringLiteral { value: "b".into() },
            )
        );
        assert_eq!(*then_branch, Statement::Block { statements: vec![Statement::CancelEvent] });
        assert!(matches!(*final_else, Statement::Block { .. }));
    }

    #[test]
    fn test_else_without_block_or_if_fails() {
        let script = parse_source(r#"event E { execute { if x == "1" { halt } else halt } }"#);
        assert!(script.events.is_empty());
        assert_eq!(script.errors.len(), 1);
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn condition_of(source: &str) -> Expression {
        let stmt = only_statement(&format!("if {} {{ halt }}", source));
        let Statement::If { condition, .. } = stmt else {
            panic!("expected if statement");
        };
        condition
    }

    #[test]
    fn test_comparison_binds_tighter_than_and() {
        let expr = condition_of(r#"name == "x" && tags contains "y""#);
        assert_eq!(
            expr,
            Expression::binary(
                Expression::binary(
                    Expression::VariableReference { name: "name".into() },
                    BinaryOp::Equals,
                    Expression::StringLiteral { value: "x".into() },
                ),
                BinaryOp::And,
                Expression::binary(
                    Expression::VariableReference { name: "tags".into() },
                    BinaryOp::Contains,
                    Expression::StringLiteral { value: "y".into() },
                ),
            )
        );
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let expr = condition_of(r#"a == "1" || b == "2" && c == "3""#);
        let Expression::BinaryExpression { operator, .. } = &expr else {
            panic!("expected binary expression");
        };
        assert_eq!(*operator, BinaryOp::Or);
    }

    #[test]
    fn test_concatenation_is_left_associative() {
        let expr = condition_of(r#""a" + "b" + "c" == "abc""#);
        let Expression::BinaryExpression { left, operator, .. } = expr else {
            panic!("expected binary expression");
        };
        assert_eq!(operator, BinaryOp::Equals);
        assert_eq!(
            *left,
            Expression::binary(
                Expression::binary(
                    Expression::StringLiteral { value: "a".into() },
                    BinaryOp::Concatenate,
                    Expression::StringLiteral { value: "b".into() },
                ),
                BinaryOp::Concatenate,
                Expression::StringLiteral { value: "c".into() },
            )
        );
    }

    #[test]
    fn test_parenthesized_grouping() {
        let expr = condition_of(r#"(a == "1" || b == "2") && c == "3""#);
        let Expression::BinaryExpression { operator, .. } = &expr else {
            panic!("expected binary expression");
        };
        assert_eq!(*operator, BinaryOp::And);
    }

    #[test]
    fn test_is_a_type_check() {
        let expr = condition_of("target is a Player");
        assert_eq!(
            expr,
            Expression::binary(
                Expression::VariableReference { name: "target".into() },
                BinaryOp::IsType,
                Expression::TypeLiteral { type_name: "Player".into() },
            )
        );
    }

    #[test]
    fn test_is_not_a_type_check() {
        let expr = condition_of("target is not a Location");
        let Expression::BinaryExpression { operator, right, .. } = expr else {
            panic!("expected binary expression");
        };
        assert_eq!(operator, BinaryOp::IsNotType);
        assert_eq!(*right, Expression::TypeLiteral { type_name: "Location".into() });
    }

    #[test]
    fn test_is_without_article_fails() {
        let script = parse_source("event E { execute { if target is Player { halt } } }");
        assert!(script.events.is_empty());
        assert_eq!(script.errors.len(), 1);
    }

    #[test]
    fn test_interpolation_desugars_to_variable_reference() {
        let stmt = only_statement(r#"send "hi " + ${player.name}"#);
        let Statement::Send { message, .. } = stmt else {
            panic!("expected send statement");
        };
        assert_eq!(
            message,
            Expression::binary(
                Expression::StringLiteral { value: "hi ".into() },
                BinaryOp::Concatenate,
                Expression::VariableReference { name: "player.name".into() },
            )
        );
    }

    #[test]
    fn test_bare_number_is_not_an_expression() {
        let script = parse_source("event E { execute { send 5 } }");
        assert!(script.events.is_empty());
        assert_eq!(script.errors.len(), 1);
    }

    // ========================================================================
    // Recovery and robustness
    // ========================================================================

    #[test]
    fn test_malformed_declaration_does_not_stop_parse() {
        let script = parse_source(
            r#"
            command { permission: "x" }
            command "ok" { }
            event Join { execute { halt } }
            "#,
        );
        assert_eq!(script.commands.len(), 1);
        assert_eq!(script.commands[0].name, "ok");
        assert_eq!(script.events.len(), 1);
        assert_eq!(script.errors.len(), 1);
    }

    #[test]
    fn test_tokens_outside_declarations_ignored() {
        let script = parse_ok(r#"halt to is command "x" { }"#);
        assert_eq!(script.commands.len(), 1);
    }

    #[test]
    fn test_empty_source() {
        let script = parse_ok("");
        assert_eq!(script, Script::default());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = r#"
            command "a", "b" {
                arguments { n: either<Integer|String> = 1 }
                execute { if n == "1" { halt } }
            }
        "#;
        assert_eq!(parse_source(source), parse_source(source));
    }

    #[test]
    fn test_excessive_nesting_rejected() {
        let mut body = String::new();
        for _ in 0..80 {
            body.push('{');
        }
        body.push_str("halt");
        for _ in 0..80 {
            body.push('}');
        }
        let script = parse_source(&format!("event E {{ execute {{ {} }} }}", body));
        assert!(script.events.is_empty());
        assert_eq!(script.errors.len(), 1);
    }

    #[test]
    fn test_long_else_if_chain_rejected() {
        // A linear chain recurses once per link and must hit the depth
        // limit, not the native stack.
        let mut body = String::from(r#"if x == "0" { halt }"#);
        for i in 0..200 {
            body.push_str(&format!(r#" else if x == "{}" {{ halt }}"#, i));
        }
        let script = parse_source(&format!("event E {{ execute {{ {} }} }}", body));
        assert!(script.events.is_empty());
        assert_eq!(script.errors.len(), 1);
        assert!(matches!(script.errors[0], ParseError::Syntax { .. }));
    }

    #[test]
    fn test_else_if_chain_within_limit_parses() {
        let mut body = String::from(r#"if x == "0" { halt }"#);
        for i in 1..40 {
            body.push_str(&format!(r#" else if x == "{}" {{ halt }}"#, i));
        }
        let script = parse_ok(&format!("event E {{ execute {{ {} }} }}", body));
        assert_eq!(script.events.len(), 1);
    }

    // ========================================================================
    // Raw block text
    // ========================================================================

    #[test]
    fn test_raw_execute_block_text() {
        let script = parse_ok("command \"x\" {\n    execute { send \"hi\" }\n}");
        let raw = script.commands[0].raw_block("execute").unwrap();
        assert_eq!(raw, "send \"hi\"");
    }

    #[test]
    fn test_raw_arguments_block_preserves_layout() {
        let script = parse_ok(
            "command \"x\" {\n    arguments {\n        a: String\n        b: Integer\n    }\n}",
        );
        let raw = script.commands[0].raw_block("arguments").unwrap();
        assert_eq!(raw, "a: String\n        b: Integer");
    }

    #[test]
    fn test_raw_block_requotes_strings() {
        let tokens = crate::lexer::lex(r#"send "a\"b""#);
        let raw = reconstruct_source(&tokens);
        assert_eq!(raw, r#"send "a\"b""#);
    }

    // ========================================================================
    // JSON contract
    // ========================================================================

    #[test]
    fn test_script_json_shape() {
        let script = parse_ok(
            r#"
            command "greet" {
                permission: "swoft.greet"
                arguments { who: Player }
                execute { send "hi" to who }
            }
            "#,
        );
        let json = serde_json::to_value(&script.commands[0]).unwrap();
        assert_eq!(json["name"], "greet");
        assert_eq!(json["permission"], "swoft.greet");
        assert!(json.get("description").is_none());
        assert_eq!(json["arguments"][0]["type"], "Player");
        assert!(json["arguments"][0].get("default").is_none());
        assert_eq!(json["executeBlock"]["type"], "ExecuteBlock");
        let stmt = &json["executeBlock"]["statements"][0];
        assert_eq!(stmt["type"], "SendCommand");
        assert_eq!(stmt["message"]["type"], "StringLiteral");
        assert_eq!(stmt["target"]["type"], "VariableReference");
    }

    #[test]
    fn test_operator_json_spellings() {
        let expr = condition_of("target is not a Player");
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json["type"], "BinaryExpression");
        assert_eq!(json["operator"], "is not");
        assert_eq!(json["right"]["typeName"], "Player");
    }

    #[test]
    fn test_if_statement_json_field_names() {
        let stmt = only_statement(r#"if a == "1" { halt } else { halt }"#);
        let json = serde_json::to_value(&stmt).unwrap();
        assert_eq!(json["type"], "IfStatement");
        assert!(json.get("thenStatement").is_some());
        assert!(json.get("elseStatement").is_some());
        assert_eq!(json["condition"]["operator"], "==");
    }
}
