//! Route table.
//!
//! Routes are string keys with URL-style path segments:
//!
//! ```text
//! studentList
//! studentDetail/{name}/{group}
//! student/{id}
//! ```
//!
//! Segments are percent-escaped when formatted and decoded when parsed, so
//! a name containing `/` survives the round trip.

use crate::model::{Roster, Student, StudentId};
use std::fmt;
use std::str::FromStr;

const STUDENT_LIST: &str = "studentList";
const STUDENT_DETAIL: &str = "studentDetail";
const STUDENT_BY_ID: &str = "student";

/// A navigable destination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Initial route: the scrollable list of students.
    #[default]
    StudentList,
    /// Detail page looked up by the literal (name, group) pair.
    /// Either parameter may be missing, in which case nothing is shown.
    StudentDetail {
        name: Option<String>,
        group: Option<String>,
    },
    /// Detail page looked up by explicit identifier.
    StudentById(StudentId),
}

/// What a route resolves to against a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    List,
    /// `None` means the detail body is blank.
    Detail(Option<&'a Student>),
}

/// Error returned when a path does not name a known route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Empty,
    UnknownRoute(String),
    TooManySegments(String),
    InvalidId(String),
    InvalidEscape(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Empty => write!(f, "Empty route"),
            RouteError::UnknownRoute(r) => write!(f, "Unknown route: {}", r),
            RouteError::TooManySegments(r) => write!(f, "Too many path segments in route: {}", r),
            RouteError::InvalidId(id) => write!(f, "Invalid student id: {}", id),
            RouteError::InvalidEscape(seg) => write!(f, "Invalid percent-escape in segment: {}", seg),
        }
    }
}

impl std::error::Error for RouteError {}

impl Route {
    /// Detail route for the given (name, group) pair
    pub fn detail(name: impl Into<String>, group: impl Into<String>) -> Self {
        Route::StudentDetail {
            name: Some(name.into()),
            group: Some(group.into()),
        }
    }

    /// Route a list row navigates to.
    ///
    /// Uses the name/group route unless the pair collides with another
    /// student, in which case the id route is the only unambiguous target.
    pub fn for_student(student: &Student, roster: &Roster) -> Self {
        if roster.has_collision(student) {
            Route::StudentById(student.id)
        } else {
            Route::detail(student.name.clone(), student.group.clone())
        }
    }

    pub fn is_detail(&self) -> bool {
        !matches!(self, Route::StudentList)
    }

    /// Resolve this route against the roster.
    ///
    /// Missing parameters and unknown students both yield a blank detail
    /// view rather than an error.
    pub fn resolve<'a>(&self, roster: &'a Roster) -> View<'a> {
        match self {
            Route::StudentList => View::List,
            Route::StudentDetail {
                name: Some(name),
                group: Some(group),
            } => {
                let student = roster.find_by_name_group(name, group);
                if student.is_none() {
                    tracing::debug!("No student named {:?} in group {:?}", name, group);
                }
                View::Detail(student)
            }
            Route::StudentDetail { .. } => {
                tracing::debug!("Detail route is missing parameters: {}", self);
                View::Detail(None)
            }
            Route::StudentById(id) => {
                let student = roster.find_by_id(*id);
                if student.is_none() {
                    tracing::debug!("No student with id {}", id);
                }
                View::Detail(student)
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::StudentList => f.write_str(STUDENT_LIST),
            Route::StudentDetail { name, group } => {
                f.write_str(STUDENT_DETAIL)?;
                // A missing name with a present group cannot be expressed
                // positionally, so the name slot is left empty.
                match (name, group) {
                    (None, None) => Ok(()),
                    (Some(n), None) => write!(f, "/{}", escape_segment(n)),
                    (n, Some(g)) => write!(
                        f,
                        "/{}/{}",
                        n.as_deref().map(escape_segment).unwrap_or_default(),
                        escape_segment(g)
                    ),
                }
            }
            Route::StudentById(id) => write!(f, "{}/{}", STUDENT_BY_ID, id),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        // Only the route name is trimmed; parameters keep their whitespace
        let trimmed = path.trim_start().trim_start_matches('/');
        let mut segments = trimmed.split('/');
        let head = segments.next().unwrap_or_default().trim_end();
        if head.is_empty() {
            return Err(RouteError::Empty);
        }

        let mut rest: Vec<&str> = segments.collect();
        // A trailing slash never adds a parameter
        while rest.last().is_some_and(|seg| seg.is_empty()) {
            rest.pop();
        }

        match head {
            STUDENT_LIST if rest.is_empty() => Ok(Route::StudentList),
            STUDENT_LIST => Err(RouteError::TooManySegments(path.to_string())),
            STUDENT_DETAIL => {
                if rest.len() > 2 {
                    return Err(RouteError::TooManySegments(path.to_string()));
                }
                let param = |i: usize| -> Result<Option<String>, RouteError> {
                    match rest.get(i) {
                        Some(seg) if !seg.is_empty() => unescape_segment(seg).map(Some),
                        _ => Ok(None),
                    }
                };
                Ok(Route::StudentDetail {
                    name: param(0)?,
                    group: param(1)?,
                })
            }
            STUDENT_BY_ID => match rest.as_slice() {
                [id] => parse_id(id).map(Route::StudentById),
                [] => Err(RouteError::InvalidId(String::new())),
                _ => Err(RouteError::TooManySegments(path.to_string())),
            },
            other => Err(RouteError::UnknownRoute(other.to_string())),
        }
    }
}

/// Plain decimal digits only; `u32::from_str` alone would also take a `+` sign.
fn parse_id(segment: &str) -> Result<StudentId, RouteError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RouteError::InvalidId(segment.to_string()));
    }
    segment
        .parse::<u32>()
        .map(StudentId)
        .map_err(|_| RouteError::InvalidId(segment.to_string()))
}

/// Percent-escape the characters that would break segment splitting.
pub fn escape_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        if c == '/' || c == '%' || c.is_control() {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", byte));
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Decode `%XX` sequences. The decoded bytes must form valid UTF-8.
pub fn unescape_segment(segment: &str) -> Result<String, RouteError> {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| RouteError::InvalidEscape(segment.to_string()))?;
            out.push(hex);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| RouteError::InvalidEscape(segment.to_string()))
}
