use crate::domain::ports::{InputSource, ReportSink};
use crate::utils::error::{Result, StudyError};
use crate::utils::validation::parse_integer;
use std::collections::VecDeque;
use std::io::{BufRead, StdinLock, Stdout, Write};

/// 主控台：提示字寫到 `writer`，從 `reader` 讀取以空白分隔的 token。
///
/// 一行可以包含多個值，多出來的 token 會保留給下一次讀取。
pub struct Console<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_token(&mut self, field: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(StudyError::UnexpectedEof {
                    field: field.to_string(),
                });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for Console<R, W> {
    fn read_integer(&mut self, field: &str) -> Result<i32> {
        write!(self.writer, "{} : ", field)?;
        self.writer.flush()?;

        let token = self.next_token(field)?;
        tracing::debug!("Read token '{}' for {}", token, field);
        parse_integer(field, &token)
    }
}

impl<R: BufRead, W: Write> ReportSink for Console<R, W> {
    fn write_output(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
