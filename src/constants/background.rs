use ratatui::style::Color;

pub const CLEAR_COLOR: Color = Color::Rgb(0x05, 0x2c, 0x46);

/// Width over height of each layer's artwork; a layer repeats every
/// `world height * aspect` world units.
pub const LAYER_ASPECTS: [f32; 3] = [2.0, 1.6, 1.2];

pub const LAYER_COLORS: [Color; 3] =
    [Color::Rgb(0xd8, 0xe4, 0xee), Color::Rgb(0x5b, 0x7a, 0x99), Color::Rgb(0x2a, 0x3f, 0x57)];

pub const MOON_BACK: &str = r#"
 .         *              .            _..._        .        *           
        .        .    *            .'  o   '.             .          .   
   *                          .   :  O   .  :      *           .         
             .        *           :    o    :                 *        . 
 .    *              .             '. _  O.'     .       .               
          .     .          *          '''              *          .      
    .                 .         .            *    .           .         *
            *     .        .          .                  .        *      
 .      .              *         .       .        *           .          
      .      *   .            .       *        .       .    *        .   
   *        .          .   *       .        .        *         .         
        .       *          .            *         .        .         *   
"#;

pub const MOON_MID: &str = r#"
                                                                
                                                                
                                                                
                                                                
                                                                
                                                                
                                                                
             _                                  __              
        ___/ \__          ___                __/  \_            
   ____/        \_    ___/   \___       ____/       \___        
__/               \__/           \_____/                \_______
%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
"#;

pub const MOON_FRONT: &str = r#"
                                                
                                                
                                                
                                                
                                                
                                                
                                                
                                                
                                                
        __                       _              
  _.-""'  '"-._     ___     _.-"' '-.       ___ 
#@#@#@#@#@#@#@#@#@#@#@#@#@#@#@#@#@#@#@#@#@#@#@#@
"#;

pub const LAYERS: [&str; 3] = [MOON_BACK, MOON_MID, MOON_FRONT];
