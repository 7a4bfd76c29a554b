//! The SimpleJava grammar
//!
//!     The grammar is fixed: 31 nonterminals, 40 terminal kinds and 65 productions. It lives
//!     in two places:
//!
//!         - [symbols]: the symbol model shared by the table, the parse stack and the
//!           parse tree (nonterminals, terminals, epsilon and the scope-close marker).
//!         - [table]: the LL(1) production table, a total function from
//!           (nonterminal, lookahead token) to the production to apply.
//!
//!     The productions, written the way the table rows read:
//!
//!         prog        → public class ID { public static void main ( String[] args ) { los } }
//!         los         → stat los | ε
//!         stat        → while | for | if | assign ; | decl ; | print ; | ;
//!         while       → while ( rel-expr bool-expr ) { los }
//!         for         → for ( for-start ; rel-expr bool-expr ; for-arith ) { los }
//!         for-start   → decl | assign | ε
//!         for-arith   → arith-expr | ε
//!         if          → if ( rel-expr bool-expr ) { los } else-if
//!         else-if     → else-or-else-if { los } else-if | ε
//!         else-or-else-if → else poss-if
//!         poss-if     → if ( rel-expr bool-expr ) | ε
//!         assign      → ID = expr
//!         decl        → type ID poss-assign
//!         poss-assign → = expr | ε
//!         print       → System.out.println ( print-expr )
//!         type        → int | boolean | char
//!         expr        → rel-expr bool-expr | char-expr
//!         char-expr   → ' CHARLIT '
//!         bool-expr   → bool-op rel-expr bool-expr | ε
//!         bool-op     → bool-eq | bool-log
//!         bool-eq     → == | !=
//!         bool-log    → && | ||
//!         rel-expr    → arith-expr rel-expr' | true | false
//!         rel-expr'   → rel-op arith-expr | ε
//!         rel-op      → < | <= | > | >=
//!         arith-expr  → term arith-expr'
//!         arith-expr' → + term arith-expr' | - term arith-expr' | ε
//!         term        → factor term'
//!         term'       → * factor term' | / factor term' | % factor term' | ε
//!         factor      → ( arith-expr ) | ID | NUM
//!         print-expr  → rel-expr bool-expr | " STRINGLIT "

pub mod symbols;
pub mod table;

pub use symbols::{NonTerminal, Symbol, Terminal};
pub use table::{predict, Production};
