use std::{fmt, rc::Rc};

use crate::interpreter::lexer::Token;

/// The root node of every parsed source unit.
///
/// A program is a sequence of statements evaluated in order. Rendering a
/// program with `Display` produces source text that parses back into an
/// equivalent tree.
///
/// # Example
/// ```
/// let (program, errors) = vabna::parse("let x = 1 + 2 * 3;");
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A statement: a unit of execution that may or may not produce a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The `let` keyword, in whichever spelling was used.
        token: Token,
        /// The name being bound.
        name:  Identifier,
        /// The bound expression.
        value: Expression,
    },
    /// `return <value>;`
    Return {
        /// The `return` keyword.
        token: Token,
        /// The returned expression.
        value: Expression,
    },
    /// An expression evaluated for its value.
    Expression {
        /// The first token of the expression.
        token:      Token,
        /// The expression itself.
        expression: Expression,
    },
}

/// A brace-delimited sequence of statements.
///
/// Blocks form the bodies of `if` branches and function literals. They are
/// evaluated in the environment they are entered from.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The opening `{`.
    pub token:      Token,
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A name, as written in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier token.
    pub token: Token,
    /// The identifier text.
    pub name:  String,
}

/// `fn(<parameters>) { <body> }`
///
/// Shared behind an `Rc` so that every closure created from the literal
/// refers to the same parameter list and body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    /// The `fn` keyword.
    pub token:      Token,
    /// Parameter names in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// An integer literal such as `42`.
    Integer {
        /// The literal token.
        token: Token,
        /// The parsed value.
        value: i64,
    },
    /// A string literal such as `"hello"`.
    String {
        /// The literal token.
        token: Token,
        /// The characters between the quotes.
        value: String,
    },
    /// `true` or `false` in any spelling.
    Boolean {
        /// The literal token.
        token: Token,
        /// The literal value.
        value: bool,
    },
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator token.
        token:    Token,
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// The operator token.
        token:    Token,
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        /// The `if` keyword.
        token:       Token,
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal.
    Function(Rc<FunctionLiteral>),
    /// `<function>(<arguments>)`
    Call {
        /// The `(` token.
        token:     Token,
        /// The callee expression.
        function:  Box<Self>,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
    /// `[<elements>]`
    Array {
        /// The `[` token.
        token:    Token,
        /// Elements in source order.
        elements: Vec<Self>,
    },
    /// `<left>[<index>]`
    Index {
        /// The `[` token.
        token: Token,
        /// The indexed expression.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
}

impl Expression {
    /// Returns the token the expression was parsed from.
    #[must_use]
    pub fn token(&self) -> &Token {
        match self {
            Self::Identifier(identifier) => &identifier.token,
            Self::Function(literal) => &literal.token,
            Self::Integer { token, .. }
            | Self::String { token, .. }
            | Self::Boolean { token, .. }
            | Self::Prefix { token, .. }
            | Self::Infix { token, .. }
            | Self::If { token, .. }
            | Self::Call { token, .. }
            | Self::Array { token, .. }
            | Self::Index { token, .. } => token,
        }
    }

    /// Gets the line number from `self`.
    ///
    /// ## Example
    /// ```
    /// let (program, _) = vabna::parse("\n\n1 + 2");
    /// let vabna::ast::Statement::Expression { expression, .. } = &program.statements[0] else {
    ///     unreachable!()
    /// };
    ///
    /// assert_eq!(expression.line_number(), 3);
    /// ```
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.token().line
    }
}

impl Statement {
    /// Returns the token the statement starts with.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Let { token, .. }
            | Self::Return { token, .. }
            | Self::Expression { token, .. } => token,
        }
    }
}

/// Borrowed view of any evaluable node.
///
/// This is the node type accepted by
/// [`Evaluator::evaluate`](crate::interpreter::evaluator::core::Evaluator::evaluate).
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A whole program.
    Program(&'a Program),
    /// A single statement.
    Statement(&'a Statement),
    /// A block of statements.
    Block(&'a BlockStatement),
    /// An expression.
    Expression(&'a Expression),
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes `items` separated by `", "`.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { token, name, value } => write!(f, "{} {name} = {value};", token.literal),
            Self::Return { token, value } => write!(f, "{} {value};", token.literal),
            Self::Expression { expression, .. } => write!(f, "{expression};"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for statement in &self.statements {
            write!(f, " {statement}")?;
        }
        write!(f, " }}")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.token.literal)?;
        write_list(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Integer { token, .. } | Self::Boolean { token, .. } => {
                write!(f, "{}", token.literal)
            },
            Self::String { value, .. } => write!(f, "\"{value}\""),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::If { token,
                       condition,
                       consequence,
                       alternative, } => {
                write!(f, "{} ({condition}) {consequence}", token.literal)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function(literal) => write!(f, "{literal}"),
            Self::Call { function,
                         arguments,
                         .. } => {
                write!(f, "{function}(")?;
                write_list(f, arguments)?;
                write!(f, ")")
            },
            Self::Array { elements, .. } => {
                write!(f, "[")?;
                write_list(f, elements)?;
                write!(f, "]")
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
        }
    }
}
