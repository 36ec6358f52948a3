//! Recursive-descent parser over the Jack grammar (`spec.md` §4.5).
//!
//! Ported rule-for-rule from `original_source/10/Compiler/compiler.py`'s
//! `compile_*` methods, but each rule now *returns* the [`Node`] it builds
//! instead of mutating a shared `parsed_tree` dict by generated id (Design
//! Notes, `spec.md` §9), and every `raise SyntaxError` site becomes a typed
//! [`JackError::UnexpectedToken`]/[`JackError::UnexpectedEndOfInput`].

use super::error::JackError;
use super::node::Node;
use super::token::{Keyword, Token, TokenKind};
use super::tokenizer::Tokenizer;

/// Parses a complete Jack source string into its `class` parse tree.
pub fn parse(source: &str) -> Result<Node, JackError> {
    Parser::new(source).parse_class()
}

pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
}

const OPS: &[char] = &['+', '-', '*', '/', '&', '|', '<', '>', '='];
const KEYWORD_CONSTANTS: &[Keyword] = &[Keyword::True, Keyword::False, Keyword::Null, Keyword::This];

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
        }
    }

    /// `class ::= 'class' identifier '{' classVarDec* subroutineDec* '}'`
    pub fn parse_class(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("class");
        node.push(self.expect_keyword(&[Keyword::Class])?);
        node.push(self.expect_identifier()?);
        node.push(self.expect_symbol(&['{'])?);

        loop {
            if self.is_keyword_in(&[Keyword::Static, Keyword::Field])? {
                node.push(self.compile_class_var_dec()?);
            } else if self.is_keyword_in(&[Keyword::Constructor, Keyword::Function, Keyword::Method])? {
                node.push(self.compile_subroutine_dec()?);
            } else if self.is_symbol_in(&['}'])? {
                node.push(self.expect_symbol(&['}'])?);
                break;
            } else {
                return Err(self.error_at_next()?);
            }
        }
        Ok(node)
    }

    /// `classVarDec ::= ('static'|'field') type varName (',' varName)* ';'`
    fn compile_class_var_dec(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("classVarDec");
        node.push(self.expect_keyword(&[Keyword::Static, Keyword::Field])?);
        node.push(self.compile_type()?);
        self.compile_var_name_list(&mut node)?;
        Ok(node)
    }

    /// `type ::= 'int' | 'char' | 'boolean' | identifier`
    fn compile_type(&mut self) -> Result<Node, JackError> {
        if self.is_keyword_in(&[Keyword::Int, Keyword::Char, Keyword::Boolean])? {
            self.expect_keyword(&[Keyword::Int, Keyword::Char, Keyword::Boolean])
        } else if self.is_identifier()? {
            self.expect_identifier()
        } else {
            Err(self.error_at_next()?)
        }
    }

    /// Shared tail of `classVarDec`/`varDec`: `varName (',' varName)* ';'`.
    fn compile_var_name_list(&mut self, parent: &mut Node) -> Result<(), JackError> {
        parent.push(self.expect_identifier()?);
        loop {
            if self.is_symbol_in(&[','])? {
                parent.push(self.expect_symbol(&[','])?);
                parent.push(self.expect_identifier()?);
            } else if self.is_symbol_in(&[';'])? {
                parent.push(self.expect_symbol(&[';'])?);
                break;
            } else {
                return Err(self.error_at_next()?);
            }
        }
        Ok(())
    }

    /// `subroutineDec ::= ('constructor'|'function'|'method') ('void'|type)
    /// subroutineName '(' parameterList ')' subroutineBody`
    fn compile_subroutine_dec(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("subroutineDec");
        node.push(self.expect_keyword(&[
            Keyword::Constructor,
            Keyword::Function,
            Keyword::Method,
        ])?);
        node.push(if self.is_keyword_in(&[Keyword::Void])? {
            self.expect_keyword(&[Keyword::Void])?
        } else {
            self.compile_type()?
        });
        node.push(self.expect_identifier()?);
        node.push(self.expect_symbol(&['('])?);
        node.push(self.compile_parameter_list()?);
        node.push(self.expect_symbol(&[')'])?);
        node.push(self.compile_subroutine_body()?);
        Ok(node)
    }

    /// `parameterList ::= ( type varName (',' type varName)* )?` — the
    /// node always exists, even when empty.
    fn compile_parameter_list(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("parameterList");
        if self.is_keyword_in(&[Keyword::Int, Keyword::Char, Keyword::Boolean])? || self.is_identifier()? {
            node.push(self.compile_type()?);
            node.push(self.expect_identifier()?);
            while self.is_symbol_in(&[','])? {
                node.push(self.expect_symbol(&[','])?);
                node.push(self.compile_type()?);
                node.push(self.expect_identifier()?);
            }
        }
        Ok(node)
    }

    /// `subroutineBody ::= '{' varDec* statements '}'`
    fn compile_subroutine_body(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("subroutineBody");
        node.push(self.expect_symbol(&['{'])?);
        while self.is_keyword_in(&[Keyword::Var])? {
            node.push(self.compile_var_dec()?);
        }
        node.push(self.compile_statements()?);
        node.push(self.expect_symbol(&['}'])?);
        Ok(node)
    }

    /// `varDec ::= 'var' type varName (',' varName)* ';'`
    fn compile_var_dec(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("varDec");
        node.push(self.expect_keyword(&[Keyword::Var])?);
        node.push(self.compile_type()?);
        self.compile_var_name_list(&mut node)?;
        Ok(node)
    }

    /// `statements ::= statement*` — always exists, even when empty.
    fn compile_statements(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("statements");
        loop {
            if self.is_keyword_in(&[Keyword::Let])? {
                node.push(self.compile_let()?);
            } else if self.is_keyword_in(&[Keyword::If])? {
                node.push(self.compile_if()?);
            } else if self.is_keyword_in(&[Keyword::While])? {
                node.push(self.compile_while()?);
            } else if self.is_keyword_in(&[Keyword::Do])? {
                node.push(self.compile_do()?);
            } else if self.is_keyword_in(&[Keyword::Return])? {
                node.push(self.compile_return()?);
            } else {
                break;
            }
        }
        Ok(node)
    }

    /// `letStatement ::= 'let' varName ('[' expression ']')? '=' expression ';'`
    fn compile_let(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("letStatement");
        node.push(self.expect_keyword(&[Keyword::Let])?);
        node.push(self.expect_identifier()?);
        if self.is_symbol_in(&['['])? {
            node.push(self.expect_symbol(&['['])?);
            node.push(self.compile_expression()?);
            node.push(self.expect_symbol(&[']'])?);
        }
        node.push(self.expect_symbol(&['='])?);
        node.push(self.compile_expression()?);
        node.push(self.expect_symbol(&[';'])?);
        Ok(node)
    }

    /// `ifStatement ::= 'if' '(' expression ')' '{' statements '}' ('else' '{' statements '}')?`
    fn compile_if(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("ifStatement");
        node.push(self.expect_keyword(&[Keyword::If])?);
        node.push(self.expect_symbol(&['('])?);
        node.push(self.compile_expression()?);
        node.push(self.expect_symbol(&[')'])?);
        node.push(self.expect_symbol(&['{'])?);
        node.push(self.compile_statements()?);
        node.push(self.expect_symbol(&['}'])?);
        if self.is_keyword_in(&[Keyword::Else])? {
            node.push(self.expect_keyword(&[Keyword::Else])?);
            node.push(self.expect_symbol(&['{'])?);
            node.push(self.compile_statements()?);
            node.push(self.expect_symbol(&['}'])?);
        }
        Ok(node)
    }

    /// `whileStatement ::= 'while' '(' expression ')' '{' statements '}'`
    fn compile_while(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("whileStatement");
        node.push(self.expect_keyword(&[Keyword::While])?);
        node.push(self.expect_symbol(&['('])?);
        node.push(self.compile_expression()?);
        node.push(self.expect_symbol(&[')'])?);
        node.push(self.expect_symbol(&['{'])?);
        node.push(self.compile_statements()?);
        node.push(self.expect_symbol(&['}'])?);
        Ok(node)
    }

    /// `doStatement ::= 'do' subroutineCall ';'`
    fn compile_do(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("doStatement");
        node.push(self.expect_keyword(&[Keyword::Do])?);
        self.compile_subroutine_call(&mut node)?;
        node.push(self.expect_symbol(&[';'])?);
        Ok(node)
    }

    /// `returnStatement ::= 'return' expression? ';'`
    fn compile_return(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("returnStatement");
        node.push(self.expect_keyword(&[Keyword::Return])?);
        if !self.is_symbol_in(&[';'])? {
            node.push(self.compile_expression()?);
        }
        node.push(self.expect_symbol(&[';'])?);
        Ok(node)
    }

    /// `expression ::= term (op term)*`
    fn compile_expression(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("expression");
        node.push(self.compile_term()?);
        while self.is_symbol_in(OPS)? {
            node.push(self.expect_symbol(OPS)?);
            node.push(self.compile_term()?);
        }
        Ok(node)
    }

    /// `term ::= integerConstant | stringConstant | keywordConstant
    ///        | varName | varName '[' expression ']' | subroutineCall
    ///        | '(' expression ')' | unaryOp term`
    ///
    /// The three identifier-led continuations (`[`, `(`, `.`) are
    /// disambiguated by a single token of lookahead past the identifier
    /// itself, per `spec.md` §4.5's tie-break rule.
    fn compile_term(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("term");
        let tok = self.require_token()?;

        match &tok.kind {
            TokenKind::IntConst(_) | TokenKind::StringConst(_) => {
                node.push(self.consume_leaf()?);
            }
            TokenKind::Keyword(k) if KEYWORD_CONSTANTS.contains(k) => {
                node.push(self.consume_leaf()?);
            }
            TokenKind::Symbol(c) if *c == '-' || *c == '~' => {
                node.push(self.consume_leaf()?); // unaryOp
                node.push(self.compile_term()?);
            }
            TokenKind::Symbol(c) if *c == '(' => {
                node.push(self.expect_symbol(&['('])?);
                node.push(self.compile_expression()?);
                node.push(self.expect_symbol(&[')'])?);
            }
            TokenKind::Identifier(_) => {
                node.push(self.consume_leaf()?);
                match self.peek_kind()? {
                    Some(TokenKind::Symbol('[')) => {
                        node.push(self.expect_symbol(&['['])?);
                        node.push(self.compile_expression()?);
                        node.push(self.expect_symbol(&[']'])?);
                    }
                    Some(TokenKind::Symbol('(')) => {
                        node.push(self.expect_symbol(&['('])?);
                        node.push(self.compile_expression_list()?);
                        node.push(self.expect_symbol(&[')'])?);
                    }
                    Some(TokenKind::Symbol('.')) => {
                        node.push(self.expect_symbol(&['.'])?);
                        node.push(self.expect_identifier()?);
                        node.push(self.expect_symbol(&['('])?);
                        node.push(self.compile_expression_list()?);
                        node.push(self.expect_symbol(&[')'])?);
                    }
                    _ => {} // bare varName
                }
            }
            _ => return Err(self.error_for(&tok)),
        }
        Ok(node)
    }

    /// `subroutineCall ::= identifier '(' expressionList ')'
    ///                   | identifier '.' identifier '(' expressionList ')'`
    ///
    /// `subroutineCall` is not one of `spec.md`'s serialized grammar tags —
    /// like the Python source, its tokens are appended directly into the
    /// caller's node (here, the `doStatement` node).
    fn compile_subroutine_call(&mut self, parent: &mut Node) -> Result<(), JackError> {
        parent.push(self.expect_identifier()?);
        if self.is_symbol_in(&['.'])? {
            parent.push(self.expect_symbol(&['.'])?);
            parent.push(self.expect_identifier()?);
        }
        parent.push(self.expect_symbol(&['('])?);
        parent.push(self.compile_expression_list()?);
        parent.push(self.expect_symbol(&[')'])?);
        Ok(())
    }

    /// `expressionList ::= ( expression (',' expression)* )?` — the node
    /// always exists, even when empty.
    fn compile_expression_list(&mut self) -> Result<Node, JackError> {
        let mut node = Node::rule("expressionList");
        if self.is_term_start()? {
            node.push(self.compile_expression()?);
            while self.is_symbol_in(&[','])? {
                node.push(self.expect_symbol(&[','])?);
                node.push(self.compile_expression()?);
            }
        }
        Ok(node)
    }

    fn is_term_start(&mut self) -> Result<bool, JackError> {
        Ok(match self.peek_kind()? {
            Some(TokenKind::IntConst(_) | TokenKind::StringConst(_) | TokenKind::Identifier(_)) => true,
            Some(TokenKind::Keyword(k)) => KEYWORD_CONSTANTS.contains(&k),
            Some(TokenKind::Symbol(c)) => c == '-' || c == '~' || c == '(',
            None => false,
        })
    }

    // --- token-matching primitives -----------------------------------

    fn peek_token_cloned(&mut self) -> Result<Option<Token>, JackError> {
        Ok(self.tokenizer.peek()?.cloned())
    }

    fn peek_kind(&mut self) -> Result<Option<TokenKind>, JackError> {
        Ok(self.peek_token_cloned()?.map(|t| t.kind))
    }

    fn require_token(&mut self) -> Result<Token, JackError> {
        self.peek_token_cloned()?.ok_or(JackError::UnexpectedEndOfInput)
    }

    fn consume_leaf(&mut self) -> Result<Node, JackError> {
        let tok = self.tokenizer.advance()?;
        Ok(Node::leaf(tok.tag(), tok.text()))
    }

    fn error_for(&self, tok: &Token) -> JackError {
        JackError::UnexpectedToken {
            token: tok.text(),
            line: tok.line,
        }
    }

    fn error_at_next(&mut self) -> Result<JackError, JackError> {
        let tok = self.require_token()?;
        Ok(self.error_for(&tok))
    }

    fn is_keyword_in(&mut self, allowed: &[Keyword]) -> Result<bool, JackError> {
        Ok(matches!(self.peek_kind()?, Some(TokenKind::Keyword(k)) if allowed.contains(&k)))
    }

    fn is_symbol_in(&mut self, allowed: &[char]) -> Result<bool, JackError> {
        Ok(matches!(self.peek_kind()?, Some(TokenKind::Symbol(c)) if allowed.contains(&c)))
    }

    fn is_identifier(&mut self) -> Result<bool, JackError> {
        Ok(matches!(self.peek_kind()?, Some(TokenKind::Identifier(_))))
    }

    fn expect_keyword(&mut self, allowed: &[Keyword]) -> Result<Node, JackError> {
        let tok = self.require_token()?;
        match tok.kind {
            TokenKind::Keyword(k) if allowed.contains(&k) => self.consume_leaf(),
            _ => Err(self.error_for(&tok)),
        }
    }

    fn expect_symbol(&mut self, allowed: &[char]) -> Result<Node, JackError> {
        let tok = self.require_token()?;
        match tok.kind {
            TokenKind::Symbol(c) if allowed.contains(&c) => self.consume_leaf(),
            _ => Err(self.error_for(&tok)),
        }
    }

    fn expect_identifier(&mut self) -> Result<Node, JackError> {
        let tok = self.require_token()?;
        match tok.kind {
            TokenKind::Identifier(_) => self.consume_leaf(),
            _ => Err(self.error_for(&tok)),
        }
    }
}
