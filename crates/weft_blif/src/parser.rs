//! The directive-driven BLIF parser.
//!
//! A single pass over the logical lines of one input. Each directive
//! mutates the [`Design`] under construction; `.names` enters a nested
//! truth-table sub-grammar whose terminating directive line is handed
//! back to the outer loop through a pending-line slot. After the last
//! line, queued net-unification edges are applied and the finished graph
//! is checked for electrical well-formedness.

use crate::codes;
use crate::directive::Directive;
use crate::lexer::{Line, LineLexer, Word};
use crate::literal;
use crate::unify::{self, UnifyEdge};
use crate::validate;
use weft_common::{Bit, Interner};
use weft_diagnostics::Diagnostic;
use weft_netlist::{
    register_standard_cells, Const, Design, Direction, InstanceId, Model, ModelId,
};
use weft_source::{FileId, SourceDb};

/// The parser state carried across the directive loop.
pub struct BlifParser<'src> {
    lexer: LineLexer<'src>,
    interner: &'src Interner,
    design: Design,
    top: Option<ModelId>,
    /// The most recent `.gate` instance, the target of `.attr`/`.param`.
    current_instance: Option<InstanceId>,
    /// Net-aliasing edges queued by 2-argument `.names`, applied after
    /// the directive loop finishes.
    unify: Vec<UnifyEdge>,
    io_model: ModelId,
}

impl<'src> BlifParser<'src> {
    /// Creates a parser over an already-loaded source file.
    ///
    /// Standard cells are registered into the design before any
    /// directive runs, so `.gate` lines can resolve them.
    pub fn new(file: FileId, sources: &'src SourceDb, interner: &'src Interner) -> Self {
        let mut design = Design::new();
        let io_model = register_standard_cells(&mut design, interner);
        Self {
            lexer: LineLexer::new(&sources.file(file).text, file),
            interner,
            design,
            top: None,
            current_instance: None,
            unify: Vec::new(),
            io_model,
        }
    }

    /// Runs the parse to completion, returning the validated design.
    ///
    /// Fail-fast: the first malformation aborts with a [`Diagnostic`]
    /// and no partial design is returned.
    pub fn parse(mut self) -> Result<Design, Diagnostic> {
        // A `.names` table is terminated by the next directive line,
        // which must then be dispatched itself: it lands here.
        let mut pending: Option<Line<'src>> = None;
        loop {
            let Some(line) = pending.take().or_else(|| self.lexer.next_line()) else {
                break;
            };
            let head = line.words[0];
            if !head.text.starts_with('.') {
                return Err(Diagnostic::error(
                    codes::EXPECTED_DIRECTIVE,
                    "expected directive",
                    head.span,
                ));
            }
            let Some(directive) = Directive::lookup(head.text) else {
                return Err(Diagnostic::error(
                    codes::UNKNOWN_DIRECTIVE,
                    format!("unknown directive '{}'", head.text),
                    head.span,
                ));
            };
            match directive {
                Directive::Model => self.model_directive(&line)?,
                Directive::Inputs => self.interface_directive(&line, directive, Direction::In)?,
                Directive::Outputs => self.interface_directive(&line, directive, Direction::Out)?,
                Directive::Names => pending = self.names_directive(&line)?,
                Directive::Gate => self.gate_directive(&line)?,
                Directive::Attr => self.attr_directive(&line, directive)?,
                Directive::Param => self.param_directive(&line, directive)?,
                Directive::End => {
                    self.require_top(directive, &line)?;
                    break;
                }
            }
        }

        let Some(top) = self.top else {
            return Err(Diagnostic::error(
                codes::NO_TOP_MODEL,
                "no top model has been defined",
                self.lexer.eof_span(),
            ));
        };
        let edges = std::mem::take(&mut self.unify);
        unify::apply(self.design.model_mut(top), edges)?;
        validate::check(
            &self.design,
            top,
            self.io_model,
            self.interner,
            self.lexer.eof_span(),
        )?;
        Ok(self.design)
    }

    fn require_top(&self, directive: Directive, line: &Line) -> Result<ModelId, Diagnostic> {
        self.top.ok_or_else(|| {
            Diagnostic::error(
                codes::BAD_CONTEXT,
                format!("{} directive outside of model definition", directive.as_str()),
                line.words[0].span,
            )
        })
    }

    fn model_directive(&mut self, line: &Line) -> Result<(), Diagnostic> {
        if line.words.len() != 2 {
            return Err(Diagnostic::error(
                codes::BAD_DIRECTIVE,
                format!(
                    "invalid .model directive: expected exactly 1 argument, got {}",
                    line.words.len() - 1
                ),
                line.span,
            ));
        }
        if self.top.is_some() {
            return Err(Diagnostic::error(
                codes::BAD_CONTEXT,
                "definition of multiple models is not supported",
                line.span,
            ));
        }
        let word = line.words[1];
        let name = self.interner.intern(word.text);
        if self.design.find_model(name).is_some() {
            return Err(Diagnostic::error(
                codes::BAD_CONTEXT,
                format!("model `{}' is already defined", word.text),
                word.span,
            ));
        }
        let id = self.design.add_model(Model::new(name));
        self.design.top = Some(id);
        self.top = Some(id);
        Ok(())
    }

    fn interface_directive(
        &mut self,
        line: &Line,
        directive: Directive,
        direction: Direction,
    ) -> Result<(), Diagnostic> {
        let top = self.require_top(directive, line)?;
        let model = self.design.model_mut(top);
        for word in &line.words[1..] {
            let name = self.interner.intern(word.text);
            let port = match model.find_port(name) {
                Some(port) => {
                    // A name used as both input and output becomes
                    // bidirectional; the promotion is never undone.
                    let conflicting = match direction {
                        Direction::In => Direction::Out,
                        _ => Direction::In,
                    };
                    if model.port(port).direction == conflicting {
                        model.port_mut(port).direction = Direction::InOut;
                    }
                    port
                }
                None => model.add_port(name, direction),
            };
            let net = model.find_or_add_net(name);
            model.connect(port, net);
        }
        Ok(())
    }

    fn names_directive(&mut self, line: &Line<'src>) -> Result<Option<Line<'src>>, Diagnostic> {
        let top = self.require_top(Directive::Names, line)?;
        let names_span = line.span;
        let args = line.words.len() - 1;

        // 1 argument ties the net to a constant (ZERO until a row says
        // otherwise); 2 arguments queue a unification edge that the
        // table below must justify with at least one `1 1` row.
        let const_net = match args {
            1 => {
                let model = self.design.model_mut(top);
                let net = model.find_or_add_net(self.interner.intern(line.words[1].text));
                model.net_mut(net).constant = Some(Bit::Zero);
                Some(net)
            }
            2 => {
                let model = self.design.model_mut(top);
                let driver = model.find_or_add_net(self.interner.intern(line.words[1].text));
                let aliased = model.find_or_add_net(self.interner.intern(line.words[2].text));
                self.unify.push(UnifyEdge {
                    driver,
                    aliased,
                    span: names_span,
                });
                None
            }
            n => {
                return Err(Diagnostic::error(
                    codes::BAD_DIRECTIVE,
                    format!("invalid .names directive: expected 1 or 2 arguments, got {n}"),
                    line.span,
                ))
            }
        };

        let mut saw_copy_row = false;
        loop {
            let Some(row) = self.lexer.next_line() else {
                if const_net.is_none() && !saw_copy_row {
                    return Err(Diagnostic::error(
                        codes::BAD_DIRECTIVE,
                        "invalid .names directive: unexpected end of file",
                        names_span,
                    ));
                }
                return Ok(None);
            };
            if row.words[0].text.starts_with('.') {
                if const_net.is_none() && !saw_copy_row {
                    return Err(Diagnostic::error(
                        codes::BAD_DIRECTIVE,
                        "invalid .names directive: .names entry expected",
                        names_span,
                    ));
                }
                // Hand the directive line back to the outer loop.
                return Ok(Some(row));
            }
            if row.words.len() != args {
                return Err(Diagnostic::error(
                    codes::BAD_NAMES_ENTRY,
                    "invalid .names entry: number of gates does not match specified number of nets",
                    row.span,
                ));
            }
            match const_net {
                Some(net) => match row.words[0].text {
                    "1" => self.design.model_mut(top).net_mut(net).constant = Some(Bit::One),
                    "0" => {}
                    _ => {
                        return Err(Diagnostic::error(
                            codes::BAD_NAMES_ENTRY,
                            "invalid .names entry: gate must be either 1 or 0",
                            row.words[0].span,
                        ))
                    }
                },
                None => {
                    if row.words[0].text != "1" || row.words[1].text != "1" {
                        return Err(Diagnostic::error(
                            codes::BAD_NAMES_ENTRY,
                            "invalid .names entry: both gates must be 1 here",
                            row.span,
                        ));
                    }
                    saw_copy_row = true;
                }
            }
        }
    }

    fn gate_directive(&mut self, line: &Line) -> Result<(), Diagnostic> {
        let top = self.require_top(Directive::Gate, line)?;
        if line.words.len() < 2 {
            return Err(Diagnostic::error(
                codes::BAD_DIRECTIVE,
                "invalid .gate directive: missing name",
                line.span,
            ));
        }
        let model_word = line.words[1];
        let name = self.interner.intern(model_word.text);
        let Some(instance_of) = self.design.find_model(name) else {
            return Err(Diagnostic::error(
                codes::UNKNOWN_NAME,
                format!("unknown model `{}'", model_word.text),
                model_word.span,
            ));
        };
        let instance = self.design.model_mut(top).add_instance(instance_of);
        self.current_instance = Some(instance);

        for word in &line.words[2..] {
            let Some(eq) = word.text.find('=') else {
                return Err(Diagnostic::error(
                    codes::BAD_DIRECTIVE,
                    "invalid formal-actual",
                    word.span,
                ));
            };
            let formal_text = &word.text[..eq];
            let actual_text = &word.text[eq + 1..];
            if actual_text.is_empty() {
                // An unconnected formal is simply not bound.
                continue;
            }
            let formal = self.interner.intern(formal_text);
            let callee = self.design.model(instance_of);
            let Some(formal_port) = callee.find_port(formal) else {
                return Err(Diagnostic::error(
                    codes::UNKNOWN_NAME,
                    format!("unknown formal `{formal_text}'"),
                    word.span,
                ));
            };
            let formal_direction = callee.port(formal_port).direction;
            let actual = self.interner.intern(actual_text);
            let model = self.design.model_mut(top);
            let pin = model.bind_pin(instance, formal, formal_direction);
            let net = model.find_or_add_net(actual);
            model.connect(pin, net);
        }
        Ok(())
    }

    fn require_instance(
        &self,
        directive: Directive,
        line: &Line,
    ) -> Result<(ModelId, InstanceId), Diagnostic> {
        if line.words.len() != 3 {
            return Err(Diagnostic::error(
                codes::BAD_DIRECTIVE,
                format!(
                    "invalid {} directive: expected exactly 2 arguments, got {}",
                    directive.as_str(),
                    line.words.len() - 1
                ),
                line.span,
            ));
        }
        match (self.top, self.current_instance) {
            (Some(top), Some(instance)) => Ok((top, instance)),
            _ => Err(Diagnostic::error(
                codes::BAD_CONTEXT,
                format!("no gate for {} directive", directive.as_str()),
                line.span,
            )),
        }
    }

    fn attr_directive(&mut self, line: &Line, directive: Directive) -> Result<(), Diagnostic> {
        let (top, instance) = self.require_instance(directive, line)?;
        let name = self.interner.intern(line.words[1].text);
        let word = line.words[2];
        let value = if word.text.starts_with('"') {
            Const::text(unquote(&word)?, word.span)
        } else {
            Const::bits(literal::decode_binary(word.text, word.span)?, word.span)
        };
        self.design
            .model_mut(top)
            .instance_mut(instance)
            .set_attr(name, value);
        Ok(())
    }

    fn param_directive(&mut self, line: &Line, directive: Directive) -> Result<(), Diagnostic> {
        let (top, instance) = self.require_instance(directive, line)?;
        let name = self.interner.intern(line.words[1].text);
        let word = line.words[2];
        let value = if word.text.starts_with('"') {
            // Radiant writes numeric literals inside strings; try the
            // multi-radix dialect before settling for the text.
            let inner = unquote(&word)?;
            match literal::decode_vendor(inner, word.span)? {
                Some(bits) => Const::bits(bits, word.span),
                None => Const::text(inner, word.span),
            }
        } else {
            Const::bits(literal::decode_binary(word.text, word.span)?, word.span)
        };
        self.design
            .model_mut(top)
            .instance_mut(instance)
            .set_param(name, value);
        Ok(())
    }
}

/// Strips the surrounding quotes from a quoted word.
fn unquote<'src>(word: &Word<'src>) -> Result<&'src str, Diagnostic> {
    let text = word.text;
    if text.len() >= 2 && text.ends_with('"') {
        Ok(&text[1..text.len() - 1])
    } else {
        Err(Diagnostic::error(
            codes::BAD_DIRECTIVE,
            "invalid string literal",
            word.span,
        ))
    }
}
