// Positional Statement (text + out-of-band arguments)

use std::fmt;

/// A value bound to a numbered placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlArg {
    Integer(i64),
    Text(String),
}

impl From<i64> for SqlArg {
    fn from(value: i64) -> Self {
        SqlArg::Integer(value)
    }
}

impl From<String> for SqlArg {
    fn from(value: String) -> Self {
        SqlArg::Text(value)
    }
}

impl From<&str> for SqlArg {
    fn from(value: &str) -> Self {
        SqlArg::Text(value.to_string())
    }
}

impl fmt::Display for SqlArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlArg::Integer(v) => write!(f, "{}", v),
            SqlArg::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Statement text using SQLite numbered placeholders (`?1`, `?2`, ...) and
/// the arguments they bind to, in position order.
///
/// Arguments can only be added through [`Statement::bind`], which returns the
/// placeholder for the position it just filled, so text and arguments cannot
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    args: Vec<SqlArg>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    /// Append trusted statement text (never caller-supplied values)
    pub fn push_sql(&mut self, fragment: &str) -> &mut Self {
        self.sql.push_str(fragment);
        self
    }

    /// Bind `arg` to the next position and return its placeholder
    pub fn bind(&mut self, arg: impl Into<SqlArg>) -> String {
        self.args.push(arg.into());
        format!("?{}", self.args.len())
    }

    /// Fixed template plus its arguments, for statements without optional clauses
    pub fn with_args(sql: impl Into<String>, args: Vec<SqlArg>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[SqlArg] {
        &self.args
    }

    /// Number of `?N` placeholders in the text
    #[cfg(test)]
    pub fn placeholder_count(&self) -> usize {
        let bytes = self.sql.as_bytes();
        bytes
            .iter()
            .enumerate()
            .filter(|(i, b)| {
                **b == b'?' && bytes.get(i + 1).is_some_and(|next| next.is_ascii_digit())
            })
            .count()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)?;
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
            write!(f, " [{}]", args.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_numbers_positions() {
        let mut stmt = Statement::new("SELECT name FROM clients WHERE queue_id = ");
        let first = stmt.bind(4);
        stmt.push_sql(&first);
        let second = stmt.bind("%ann%");
        stmt.push_sql(" AND name LIKE ").push_sql(&second);

        assert_eq!(first, "?1");
        assert_eq!(second, "?2");
        assert_eq!(
            stmt.sql(),
            "SELECT name FROM clients WHERE queue_id = ?1 AND name LIKE ?2"
        );
        assert_eq!(
            stmt.args(),
            &[SqlArg::Integer(4), SqlArg::Text("%ann%".to_string())]
        );
        assert_eq!(stmt.placeholder_count(), 2);
    }

    #[test]
    fn test_placeholder_count_ignores_bare_question_marks() {
        let stmt = Statement::new("SELECT '?' FROM t WHERE a = ?1 AND b = ?12");
        assert_eq!(stmt.placeholder_count(), 2);
    }
}
